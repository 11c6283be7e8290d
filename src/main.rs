//! Merge a CMS translation table read from stdin into a message tree on stdout.
//!
//! Usage: `tippit-i18n [workspace] [locale]`

use std::path::PathBuf;
use std::process::ExitCode;

use tippit_i18n::Locale;
use tippit_i18n::config::{
    ConfigManager,
    I18nSettings,
};
use tippit_i18n::messages::{
    Messages,
    TranslationTable,
    load_messages_file,
    merge_translations,
};
use tokio::io::{
    AsyncReadExt,
    AsyncWriteExt,
};
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> ExitCode {
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer)
        .init();

    let mut args = std::env::args().skip(1);
    let workspace_root = args.next().map(PathBuf::from);
    let locale_arg = args.next();

    let mut config_manager = ConfigManager::new();
    if let Err(error) = config_manager.load_settings(workspace_root) {
        tracing::error!("Configuration error: {}", error);
        return ExitCode::FAILURE;
    }
    let settings = config_manager.get_settings();

    let locale = match locale_arg.as_deref().map(str::parse::<Locale>).transpose() {
        Ok(locale) => locale.unwrap_or(settings.default_locale),
        Err(error) => {
            tracing::error!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    match run(settings, locale).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{}", error);
            ExitCode::FAILURE
        }
    }
}

async fn run(settings: &I18nSettings, locale: Locale) -> Result<(), BoxError> {
    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    let table: TranslationTable = serde_json::from_str(&input)?;

    let mut messages = match &settings.messages_dir {
        Some(dir) => load_messages_file(dir, locale)?.unwrap_or_default(),
        None => Messages::new(),
    };
    messages.deep_merge(merge_translations(&table));

    let mut output = serde_json::to_vec_pretty(&messages)?;
    output.push(b'\n');
    let mut stdout = tokio::io::stdout();
    stdout.write_all(&output).await?;
    stdout.flush().await?;

    tracing::debug!(%locale, entries = table.len(), "Wrote merged messages");
    Ok(())
}
