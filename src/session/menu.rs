use std::str::FromStr;

use super::SessionError;

/// Numbered menu entries, 1 through 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    RegisterProduct,
    RemoveProduct,
    QueryProduct,
    ListProducts,
    RegisterRequest,
    ProcessRequest,
    CurrentRequest,
    ListRequests,
    RegisterClient,
    AttendClient,
    ListWaiting,
    Undo,
    Exit,
}

impl MenuOption {
    /// In menu order; an option's number is its index plus one.
    pub const ALL: [MenuOption; 13] = [
        MenuOption::RegisterProduct,
        MenuOption::RemoveProduct,
        MenuOption::QueryProduct,
        MenuOption::ListProducts,
        MenuOption::RegisterRequest,
        MenuOption::ProcessRequest,
        MenuOption::CurrentRequest,
        MenuOption::ListRequests,
        MenuOption::RegisterClient,
        MenuOption::AttendClient,
        MenuOption::ListWaiting,
        MenuOption::Undo,
        MenuOption::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::RegisterProduct => "Register Product",
            MenuOption::RemoveProduct => "Remove Product",
            MenuOption::QueryProduct => "Query Product",
            MenuOption::ListProducts => "List Products",
            MenuOption::RegisterRequest => "Register Request",
            MenuOption::ProcessRequest => "Process Request",
            MenuOption::CurrentRequest => "Show Request in Progress",
            MenuOption::ListRequests => "List Pending Requests",
            MenuOption::RegisterClient => "Register Waiting Client",
            MenuOption::AttendClient => "Attend Client",
            MenuOption::ListWaiting => "Show Waiting List",
            MenuOption::Undo => "Undo Last Action",
            MenuOption::Exit => "Exit",
        }
    }
}

impl FromStr for MenuOption {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or_else(|| SessionError::InvalidMenuSelection(s.to_string()))
    }
}

pub fn render_menu() -> String {
    let mut menu = String::from("\n---- Inventory Management Menu ----\n");
    for (index, option) in MenuOption::ALL.iter().enumerate() {
        menu.push_str(&format!("{}. {}\n", index + 1, option.label()));
    }
    menu.push_str("Select an option: ");
    menu
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_map_to_options() {
        assert_eq!("1".parse::<MenuOption>().unwrap(), MenuOption::RegisterProduct);
        assert_eq!("12".parse::<MenuOption>().unwrap(), MenuOption::Undo);
        assert_eq!("13".parse::<MenuOption>().unwrap(), MenuOption::Exit);
    }

    #[test]
    fn out_of_range_and_garbage_are_rejected() {
        for input in ["0", "14", "-1", "abc", ""] {
            assert!(matches!(
                input.parse::<MenuOption>(),
                Err(SessionError::InvalidMenuSelection(_))
            ));
        }
    }

    #[test]
    fn menu_lists_every_option() {
        let menu = render_menu();
        assert!(menu.contains("1. Register Product\n"));
        assert!(menu.contains("13. Exit\n"));
        assert!(menu.ends_with("Select an option: "));
    }
}
