//! Message trees: CMS translation merging, bundled message files and key lookup.
mod error;
mod loader;
mod merge;
mod table;
mod tree;

pub use error::MessagesError;
pub use loader::{
    load_messages_file,
    messages_file_path,
};
pub use merge::{
    PATH_SEPARATOR,
    merge_translations,
};
pub use table::{
    NamespaceEntries,
    TranslationRecord,
    TranslationTable,
};
pub use tree::{
    MessageTree,
    Messages,
    upsert_path,
};
