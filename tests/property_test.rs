//! Property tests for default resolution and list splitting.

use cfgaccess::adapters::ini_store::IniStore;
use cfgaccess::domain::accessor::ConfigurationAccessor;
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

fn value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ,._/-]{0,30}[A-Za-z0-9]"
}

fn accessor_for(section: &str, option: &str, value: &str) -> ConfigurationAccessor<IniStore> {
    let ini = format!("[{section}]\n{option} = {value}\n");
    ConfigurationAccessor::new(IniStore::from_string(&ini).unwrap())
}

proptest! {
    #[test]
    fn absent_option_returns_default(
        section in name(),
        option in name(),
        default in ".{0,20}",
    ) {
        let accessor = accessor_for("present", "present", "value");
        prop_assume!(option != "present");
        prop_assert_eq!(accessor.get_option(&section, &option, &default), default);
    }

    #[test]
    fn present_option_returns_raw_value(section in name(), option in name(), raw in value()) {
        let accessor = accessor_for(&section, &option, &raw);
        prop_assert_eq!(accessor.get_option(&section, &option, "default"), raw);
    }

    #[test]
    fn integers_read_back(section in name(), option in name(), n in any::<i64>()) {
        let accessor = accessor_for(&section, &option, &n.to_string());
        prop_assert_eq!(accessor.get_option_as_int(&section, &option, 0).unwrap(), n);
    }

    #[test]
    fn list_items_are_trimmed(section in name(), option in name(), raw in value()) {
        let accessor = accessor_for(&section, &option, &raw);
        let items = accessor.get_option_as_list(&section, &option, Vec::new());
        prop_assert_eq!(items.len(), raw.split(',').count());
        for item in &items {
            prop_assert_eq!(item.trim(), item.as_str());
        }
    }

    #[test]
    fn getters_are_idempotent(section in name(), option in name(), raw in value()) {
        let accessor = accessor_for(&section, &option, &raw);
        prop_assert_eq!(
            accessor.get_option(&section, &option, ""),
            accessor.get_option(&section, &option, "")
        );
        prop_assert_eq!(
            accessor.get_option_as_list(&section, &option, Vec::new()),
            accessor.get_option_as_list(&section, &option, Vec::new())
        );
        prop_assert_eq!(
            accessor.get_option_as_set(&section, &option, Default::default()),
            accessor.get_option_as_set(&section, &option, Default::default())
        );
    }
}
