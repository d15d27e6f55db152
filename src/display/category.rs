//! Category display formatting

use crate::models::Category;

/// Format the fixed category list, one per line
pub fn format_category_list() -> String {
    let mut output = String::from("Categories:\n");
    for category in Category::ALL.iter() {
        output.push_str(&format!("  {}\n", category));
    }
    output.push_str("\nAny other text is accepted as a custom category.\n");
    output
}
