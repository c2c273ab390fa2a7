pub mod alert;
pub mod button;
pub mod input;
pub mod spinner;
pub mod textarea;

// Re-export component symbols so callers can `use crate::components::ui::Button` etc.
pub use alert::*;
pub use button::*;
pub use input::*;
pub use spinner::*;
pub use textarea::*;

#[cfg(test)]
mod tests {
    const STYLESHEET: &str = include_str!("../../../style/tailwind.css");

    #[test]
    fn test_stylesheet_defines_colour_tokens_used_by_components() {
        for token in [
            "background",
            "foreground",
            "popover",
            "popover-foreground",
            "primary",
            "primary-foreground",
            "accent",
            "accent-foreground",
            "muted-foreground",
            "destructive",
            "border",
            "input",
            "ring",
        ] {
            assert!(
                STYLESHEET.contains(&format!("--color-{token}:")),
                "missing theme token --color-{token}"
            );
        }
    }
}
