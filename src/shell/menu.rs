//! Numbered menu options.

/// Menu text shown before every choice, including the leading blank line.
pub const MENU_TEXT: &str = "\n1. Add Patient\n2. View Patients\n3. Search Patient\n4. Update Patient\n5. Delete Patient\n6. Generate Bill\n7. Logout";

/// A recognised menu option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddPatient,
    ViewPatients,
    SearchPatient,
    UpdatePatient,
    DeletePatient,
    GenerateBill,
    Logout,
}

impl MenuChoice {
    /// Map a typed number to its option. `None` for anything outside 1..=7.
    #[must_use]
    pub fn from_number(number: i32) -> Option<Self> {
        match number {
            1 => Some(Self::AddPatient),
            2 => Some(Self::ViewPatients),
            3 => Some(Self::SearchPatient),
            4 => Some(Self::UpdatePatient),
            5 => Some(Self::DeletePatient),
            6 => Some(Self::GenerateBill),
            7 => Some(Self::Logout),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_number() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::AddPatient));
        assert_eq!(MenuChoice::from_number(6), Some(MenuChoice::GenerateBill));
        assert_eq!(MenuChoice::from_number(7), Some(MenuChoice::Logout));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(8), None);
        assert_eq!(MenuChoice::from_number(-1), None);
    }

    #[test]
    fn test_menu_lists_seven_options() {
        let lines: Vec<&str> = MENU_TEXT.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "1. Add Patient");
        assert_eq!(lines[6], "7. Logout");
    }
}
