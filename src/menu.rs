use crate::config::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Start,
    Difficulty,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    DifficultyChanged(Difficulty),
    Quit,
}

const OPTIONS: [MenuOption; 3] = [MenuOption::Start, MenuOption::Difficulty, MenuOption::Quit];

pub struct MenuController {
    selected: usize,
    difficulty: Difficulty,
}

impl MenuController {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            selected: 0,
            difficulty,
        }
    }

    pub fn handle(&mut self, input: MenuInput) -> Option<MenuAction> {
        match input {
            MenuInput::Up => {
                self.selected = (self.selected + OPTIONS.len() - 1) % OPTIONS.len();
                None
            }
            MenuInput::Down => {
                self.selected = (self.selected + 1) % OPTIONS.len();
                None
            }
            MenuInput::Confirm => Some(match OPTIONS[self.selected] {
                MenuOption::Start => MenuAction::Start,
                MenuOption::Difficulty => {
                    self.difficulty = self.difficulty.next();
                    MenuAction::DifficultyChanged(self.difficulty)
                }
                MenuOption::Quit => MenuAction::Quit,
            }),
        }
    }

    pub fn selected(&self) -> MenuOption {
        OPTIONS[self.selected]
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Labels in display order, paired with whether they are selected.
    pub fn entries(&self) -> Vec<(String, bool)> {
        OPTIONS
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let label = match option {
                    MenuOption::Start => "Start Game".to_string(),
                    MenuOption::Difficulty => format!("Difficulty: {}", self.difficulty.label()),
                    MenuOption::Quit => "Quit".to_string(),
                };
                (label, i == self.selected)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut menu = MenuController::new(Difficulty::Normal);
        assert_eq!(menu.selected(), MenuOption::Start);

        assert_eq!(menu.handle(MenuInput::Up), None);
        assert_eq!(menu.selected(), MenuOption::Quit);

        menu.handle(MenuInput::Down);
        assert_eq!(menu.selected(), MenuOption::Start);
        menu.handle(MenuInput::Down);
        assert_eq!(menu.selected(), MenuOption::Difficulty);
    }

    #[test]
    fn test_confirm_actions() {
        let mut menu = MenuController::new(Difficulty::Normal);
        assert_eq!(menu.handle(MenuInput::Confirm), Some(MenuAction::Start));

        menu.handle(MenuInput::Up);
        assert_eq!(menu.handle(MenuInput::Confirm), Some(MenuAction::Quit));
    }

    #[test]
    fn test_difficulty_cycles() {
        let mut menu = MenuController::new(Difficulty::Normal);
        menu.handle(MenuInput::Down);
        assert_eq!(
            menu.handle(MenuInput::Confirm),
            Some(MenuAction::DifficultyChanged(Difficulty::Hard))
        );
        assert_eq!(
            menu.handle(MenuInput::Confirm),
            Some(MenuAction::DifficultyChanged(Difficulty::Easy))
        );
        assert_eq!(menu.difficulty(), Difficulty::Easy);
        assert_eq!(menu.selected(), MenuOption::Difficulty);
    }

    #[test]
    fn test_entries_mark_selection() {
        let mut menu = MenuController::new(Difficulty::Easy);
        menu.handle(MenuInput::Down);
        let entries = menu.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1], ("Difficulty: Easy".to_string(), true));
        assert!(!entries[0].1);
    }
}
