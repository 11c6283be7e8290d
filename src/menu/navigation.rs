use super::item::MenuItem;

/// Items `role` may see, in display order.
///
/// Disabled items are dropped. Items with no roles are visible to everyone. Items with
/// equal `order` keep their relative position.
#[must_use]
pub fn navigation_items(items: &[MenuItem], role: &str) -> Vec<MenuItem> {
    let mut visible: Vec<MenuItem> = items
        .iter()
        .filter(|item| item.enabled)
        .filter(|item| item.roles.is_empty() || item.roles.iter().any(|r| r == role))
        .cloned()
        .collect();
    visible.sort_by_key(|item| item.order);
    visible
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::test_utils::menu_item;

    fn item(key: &str, order: i32, roles: &[&str], enabled: bool) -> MenuItem {
        MenuItem {
            order,
            enabled,
            roles: roles.iter().map(|r| (*r).to_string()).collect(),
            ..menu_item(key, key)
        }
    }

    fn keys(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|item| item.key.as_str()).collect()
    }

    #[rstest]
    fn filters_by_role_and_sorts_by_order() {
        let items = vec![
            item("staff", 5, &["owner"], true),
            item("dashboard", 1, &["owner", "manager"], true),
            item("help", 9, &[], true),
            item("beta", 2, &["manager"], false),
        ];

        let visible = navigation_items(&items, "manager");

        assert_that!(keys(&visible), elements_are![eq(&"dashboard"), eq(&"help")]);
    }

    #[rstest]
    fn equal_order_keeps_input_order() {
        let items = vec![item("b", 1, &[], true), item("a", 1, &[], true)];

        let visible = navigation_items(&items, "owner");

        assert_that!(keys(&visible), elements_are![eq(&"b"), eq(&"a")]);
    }
}
