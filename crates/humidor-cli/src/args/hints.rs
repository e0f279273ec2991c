pub mod cmd {
    pub const INIT: &str = "humidor init";
    pub const DASHBOARD: &str = "humidor dashboard";

    pub const HUMIDOR_ADD: &str = "humidor humidor add <name> --size \"100 count\"";
    pub const HUMIDOR_LIST: &str = "humidor humidor list";

    pub const CIGAR_ADD: &str = "humidor cigar add --humidor <humidor> --brand <brand>";
    pub const CIGAR_LIST: &str = "humidor cigar list";

    pub const JOURNAL_LIST: &str = "humidor journal list";

    pub const IMPORT: &str = "humidor import <file>";
    pub const EXPORT: &str = "humidor export --to json --output collection.json";

    pub const CONFIG_SHOW: &str = "humidor config show";
}

pub mod fmt {
    pub fn humidor_show(key: &str) -> String {
        format!("humidor humidor show {}", key)
    }

    pub fn humidor_remove_force(key: &str) -> String {
        format!("humidor humidor remove {} --force", key)
    }

    pub fn cigar_show(key: &str) -> String {
        format!("humidor cigar show {}", key)
    }

    pub fn journal_add(cigar: &str) -> String {
        format!("humidor journal add {} --rating 4", cigar)
    }

    pub fn browse(panel: &str, label: &str) -> String {
        format!("humidor browse --panel {} --label \"{}\"", panel, label)
    }
}
