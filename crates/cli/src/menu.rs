//! Menu layout and choice decoding.

pub const BANNER: &str = "\
*********************************************************
**   InventTrent - Where Inventory Meets Intelligence  **
*********************************************************";

const MENU_BODY: &str = "\
**         1. Add Item                                 **
**         2. Update Stock                             **
**         3. Delete Item                              **
**         4. Search Item                              **
**         5. Display Inventory                        **
**         6. Check Low Stock Alerts                   **
**         7. Generate Inventory Summary               **
**         8. Exit                                     **
*********************************************************";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddItem,
    UpdateStock,
    DeleteItem,
    SearchItem,
    DisplayInventory,
    CheckLowStock,
    GenerateSummary,
    Exit,
}

impl MenuChoice {
    pub fn from_number(number: i64) -> Option<Self> {
        let choice = match number {
            1 => Self::AddItem,
            2 => Self::UpdateStock,
            3 => Self::DeleteItem,
            4 => Self::SearchItem,
            5 => Self::DisplayInventory,
            6 => Self::CheckLowStock,
            7 => Self::GenerateSummary,
            8 => Self::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// Sub-menu of "Search Item".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBy {
    Id,
    Name,
}

impl SearchBy {
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Self::Id),
            2 => Some(Self::Name),
            _ => None,
        }
    }
}

/// Banner followed by the numbered entries.
pub fn menu_text() -> String {
    format!("{BANNER}\n{MENU_BODY}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_number_decodes() {
        let decoded: Vec<_> = (1..=8).filter_map(MenuChoice::from_number).collect();
        assert_eq!(decoded.len(), 8);
        assert_eq!(decoded[0], MenuChoice::AddItem);
        assert_eq!(decoded[7], MenuChoice::Exit);
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(9), None);
        assert_eq!(SearchBy::from_number(3), None);
    }

    #[test]
    fn menu_lists_all_entries() {
        let text = menu_text();
        assert!(text.contains("1. Add Item"));
        assert!(text.contains("8. Exit"));
    }
}
