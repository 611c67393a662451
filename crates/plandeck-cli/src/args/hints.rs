pub mod cmd {
    pub const INIT: &str = "plandeck init";
    pub const ADD: &str = "plandeck add --title <TITLE> --description <TEXT> --date <DATE>";
    pub const LIST: &str = "plandeck list";
    pub const TUI: &str = "plandeck tui";
}

pub mod fmt {
    pub fn done(id: &str) -> String {
        format!("plandeck done {}", id)
    }
}
