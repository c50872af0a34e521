//! Interactive main menu
//!
//! Shows the numbered menu, reads one choice per turn and dispatches it to the
//! session. Errors from an action are shown and the menu comes back; only
//! "Exit" or end of input leave the loop.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::display::report::{boxed_title, double_separator, separator};
use crate::display::{format_selection_list, format_summary};
use crate::error::{PlannerError, PlannerResult};
use crate::input::{parse_menu_choice, Prompter};
use crate::session::Session;

const MENU_WIDTH: usize = 25;
const BANNER_WIDTH: usize = 50;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SetBudget,
    AddExpense,
    EditExpense,
    DeleteExpense,
    ViewSummary,
    SaveToFile,
    LoadFromFile,
    Exit,
}

impl MenuChoice {
    /// All entries in menu order
    pub const ALL: [MenuChoice; 8] = [
        Self::SetBudget,
        Self::AddExpense,
        Self::EditExpense,
        Self::DeleteExpense,
        Self::ViewSummary,
        Self::SaveToFile,
        Self::LoadFromFile,
        Self::Exit,
    ];

    /// Menu entry for a number in `1..=8`
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    pub fn number(&self) -> u8 {
        match Self::ALL.iter().position(|c| c == self) {
            Some(i) => i as u8 + 1,
            None => 0,
        }
    }

    /// Parse a line typed at the menu prompt
    pub fn parse(s: &str) -> PlannerResult<Self> {
        let n = parse_menu_choice(s)?;
        Self::from_number(n)
            .ok_or_else(|| PlannerError::Validation("Invalid choice. Please try again.".into()))
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::SetBudget => "Set Budget",
            Self::AddExpense => "Add an Expense",
            Self::EditExpense => "Edit an Expense",
            Self::DeleteExpense => "Delete an Expense",
            Self::ViewSummary => "View Spending Summary",
            Self::SaveToFile => "Save Data to File",
            Self::LoadFromFile => "Load Data from File",
            Self::Exit => "Exit Program",
        };
        write!(f, "{}", label)
    }
}

/// Runs the menu loop over a session
pub struct MenuController<R, W> {
    session: Session,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> MenuController<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            prompter: Prompter::new(input, output),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Hand back the session and output stream
    pub fn into_parts(self) -> (Session, W) {
        (self.session, self.prompter.into_output())
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> PlannerResult<()> {
        if self.session.settings().show_banner {
            self.print_banner()?;
        }

        loop {
            self.print_menu()?;

            let line = match self.prompter.read_line("\nEnter your choice: ") {
                Ok(line) => line,
                Err(PlannerError::InputClosed) => break,
                Err(e) => return Err(e),
            };

            let choice = match MenuChoice::parse(&line) {
                Ok(choice) => choice,
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };

            if choice == MenuChoice::Exit {
                self.prompter
                    .line("\nThank you for using the Budget Planner. Goodbye!")?;
                break;
            }

            debug!(?choice, "menu choice");
            match self.dispatch(choice) {
                Ok(()) => {}
                Err(PlannerError::InputClosed) => break,
                Err(e) => self.report(&e)?,
            }
        }

        Ok(())
    }

    /// Perform one menu action
    pub fn dispatch(&mut self, choice: MenuChoice) -> PlannerResult<()> {
        match choice {
            MenuChoice::SetBudget => self.set_budget(),
            MenuChoice::AddExpense => self.add_expense(),
            MenuChoice::EditExpense => self.edit_expense(),
            MenuChoice::DeleteExpense => self.delete_expense(),
            MenuChoice::ViewSummary => {
                let summary = format_summary(self.session.store());
                self.prompter.say(&summary)
            }
            MenuChoice::SaveToFile => self.save(),
            MenuChoice::LoadFromFile => self.load(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn set_budget(&mut self) -> PlannerResult<()> {
        let input = self.prompter.read_line("\nEnter total budget: ")?;
        self.session.set_budget(&input)?;
        self.prompter.line("\nBudget successfully set!")
    }

    fn add_expense(&mut self) -> PlannerResult<()> {
        self.prompter.line("")?;
        let input = self.prompter.ask_expense("")?;
        self.session.store_mut().add_expense(input);
        self.prompter.line("\nExpense successfully added!")
    }

    fn edit_expense(&mut self) -> PlannerResult<()> {
        let Some(index) = self.select("edit")? else {
            return Ok(());
        };

        self.prompter.line("")?;
        let input = self.prompter.ask_expense("new ")?;
        self.session.store_mut().edit_expense(index, input)?;
        self.prompter.line("\nExpense successfully edited!")
    }

    fn delete_expense(&mut self) -> PlannerResult<()> {
        let Some(index) = self.select("delete")? else {
            return Ok(());
        };

        self.session.store_mut().delete_expense(index)?;
        self.prompter.line("\nExpense successfully deleted!")
    }

    /// List the expenses and ask for one by position
    ///
    /// Returns `None` when there is nothing to choose from.
    fn select(&mut self, action: &str) -> PlannerResult<Option<usize>> {
        let store = self.session.store();
        if store.is_empty() {
            self.prompter.line(&format!("No expenses to {}.", action))?;
            return Ok(None);
        }

        let len = store.len();
        let listing = format_selection_list(store);
        self.prompter.say(&listing)?;

        let prompt = format!("\nEnter expense number to {}: ", action);
        self.prompter.ask_index(&prompt, len).map(Some)
    }

    fn save(&mut self) -> PlannerResult<()> {
        let input = self
            .prompter
            .read_line("\nEnter filename to save (blank for the current file): ")?;
        let path = self.session.resolve_file(&input)?;
        self.session.save(&path)?;
        self.prompter
            .line(&format!("\nData saved successfully to {}!", path.display()))
    }

    fn load(&mut self) -> PlannerResult<()> {
        let input = self
            .prompter
            .read_line("\nEnter filename to load (blank for the current file): ")?;
        let path = self.session.resolve_file(&input)?;
        self.session.load(&path)?;
        self.prompter.line("\nData loaded successfully!")
    }

    fn report(&mut self, err: &PlannerError) -> PlannerResult<()> {
        self.prompter.line("")?;
        self.prompter.line(&err.user_message())
    }

    fn print_banner(&mut self) -> PlannerResult<()> {
        let rule = double_separator(BANNER_WIDTH);
        self.prompter.line(&rule)?;
        self.prompter.line("  Welcome to the Interior Design Budget Planner!")?;
        self.prompter.line(&rule)?;
        self.prompter
            .line("  Plan, track, and manage your renovation budget")
    }

    fn print_menu(&mut self) -> PlannerResult<()> {
        let mut menu = String::from("\n");
        menu.push_str(&boxed_title("MAIN MENU", MENU_WIDTH));
        for choice in MenuChoice::ALL {
            menu.push_str(&format!("{}. {}\n", choice.number(), choice));
        }
        menu.push_str(&separator(MENU_WIDTH));
        menu.push('\n');
        self.prompter.say(&menu)
    }
}
