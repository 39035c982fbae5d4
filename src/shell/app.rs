//! Console application state machine.
//!
//! Handles:
//! - The login loop
//! - Menu dispatch
//! - Field prompting for each registry operation
//!
//! `AwaitingLogin -> MenuActive -> AwaitingLogin`. There is no exit option;
//! `run` only returns on a fatal error (malformed number, end of input, I/O).

use std::io::{BufRead, Write};

use crate::application::{RegistryError, RegistryService};
use crate::domain::{PatientRecord, SessionGate};
use crate::ports::PatientStore;
use crate::Result;

use super::console::{format_amount, Console};
use super::menu::{MenuChoice, MENU_TEXT};

const BANNER: &str = "=== Hospital Management System ===";
const NOT_FOUND: &str = "Patient not found!";

/// Current phase of the console session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    AwaitingLogin,
    MenuActive,
}

/// Interactive console over a session gate and a registry.
pub struct Shell<R, W, S = crate::adapters::InMemoryStore>
where
    S: PatientStore,
{
    console: Console<R, W>,
    gate: SessionGate,
    registry: RegistryService<S>,
    state: ShellState,
}

impl<R, W, S> Shell<R, W, S>
where
    R: BufRead,
    W: Write,
    S: PatientStore,
{
    /// Create a shell with injected services, starting at the login prompt.
    pub fn new(console: Console<R, W>, gate: SessionGate, registry: RegistryService<S>) -> Self {
        Self {
            console,
            gate,
            registry,
            state: ShellState::AwaitingLogin,
        }
    }

    /// Print the banner and drive the session until a fatal error.
    ///
    /// # Errors
    /// Returns the fatal error that ended the session.
    pub fn run(&mut self) -> Result<()> {
        self.console.say(BANNER)?;
        loop {
            self.step()?;
        }
    }

    /// Run one login attempt or one menu choice, returning the new state.
    ///
    /// # Errors
    /// Returns error on malformed numeric input, end of input or I/O failure.
    pub fn step(&mut self) -> Result<ShellState> {
        match self.state {
            ShellState::AwaitingLogin => self.login_attempt()?,
            ShellState::MenuActive => self.menu_round()?,
        }
        Ok(self.state)
    }

    #[must_use]
    pub fn state(&self) -> ShellState {
        self.state
    }

    #[must_use]
    pub fn gate(&self) -> &SessionGate {
        &self.gate
    }

    #[must_use]
    pub fn registry(&self) -> &RegistryService<S> {
        &self.registry
    }

    /// Consume the shell, returning the console output sink.
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    fn login_attempt(&mut self) -> Result<()> {
        let user_id = self.console.prompt("user id", "Enter User ID (min 8 chars): ")?;
        let password = zeroize::Zeroizing::new(self.console.prompt(
            "password",
            "Enter Password (min 10 chars, 1 upper, 1 num, 1 special): ",
        )?);

        if self.gate.login(&user_id, &password) {
            self.console.say("Login successful!")?;
            self.state = ShellState::MenuActive;
        } else {
            self.console.say("Invalid credentials. Please try again.")?;
        }
        Ok(())
    }

    fn menu_round(&mut self) -> Result<()> {
        self.console.say(MENU_TEXT)?;
        let number = self.console.prompt_int("menu choice", "Choose an option: ")?;

        let Some(choice) = MenuChoice::from_number(number) else {
            tracing::debug!(number = number, user_id = ?self.gate.user_id(), "Unknown menu option");
            return self.console.say("Invalid option!");
        };
        tracing::debug!(?choice, user_id = ?self.gate.user_id(), "Menu choice");

        match choice {
            MenuChoice::AddPatient => self.add_patient(),
            MenuChoice::ViewPatients => self.view_active_patients(),
            MenuChoice::SearchPatient => self.search_patient(),
            MenuChoice::UpdatePatient => self.update_patient(),
            MenuChoice::DeletePatient => self.delete_patient(),
            MenuChoice::GenerateBill => self.generate_bill(),
            MenuChoice::Logout => {
                self.gate.logout();
                self.state = ShellState::AwaitingLogin;
                self.console.say("Logged out.")
            }
        }
    }

    fn add_patient(&mut self) -> Result<()> {
        let id = self.console.prompt("patient id", "Enter Patient ID: ")?;
        let name = self.console.prompt("name", "Enter Name: ")?;
        let room = self.console.prompt("room number", "Enter Room Number: ")?;
        let doctor = self.console.prompt("doctor details", "Enter Doctor Details: ")?;
        let age = self.console.prompt_int("age", "Enter Age: ")?;
        let gender = self.console.prompt("gender", "Enter Gender: ")?;
        let date = self
            .console
            .prompt("admission date", "Enter Admission Date (dd.mm.yy): ")?;

        self.registry
            .add(PatientRecord::new(id, name, room, doctor, age, gender, date));
        self.console.say("Patient added successfully!")
    }

    fn view_active_patients(&mut self) -> Result<()> {
        let lines: Vec<String> = self
            .registry
            .list_active()
            .iter()
            .enumerate()
            .map(|(i, p)| {
                format!(
                    "{}. ID: {}, Name: {}, Bill: {:.2}",
                    i + 1,
                    p.patient_id,
                    p.name,
                    p.bill_amount
                )
            })
            .collect();

        if lines.is_empty() {
            return self.console.say("No active patients found.");
        }

        self.console.say("Active Patients:")?;
        for line in &lines {
            self.console.say(line)?;
        }
        Ok(())
    }

    fn search_patient(&mut self) -> Result<()> {
        let id = self
            .console
            .prompt("patient id", "Enter Patient ID to search: ")?;

        let message = match self.registry.find_by_id(&id) {
            Ok(p) => format!(
                "Patient found: {}, Bill: {}",
                p.name,
                format_amount(p.bill_amount)
            ),
            Err(RegistryError::NotFound(_)) => NOT_FOUND.to_string(),
        };
        self.console.say(&message)
    }

    fn update_patient(&mut self) -> Result<()> {
        let id = self
            .console
            .prompt("patient id", "Enter Patient ID to update: ")?;

        if self.registry.find_by_id(&id).is_err() {
            return self.console.say(NOT_FOUND);
        }

        let room = self
            .console
            .prompt("room number", "Enter new Room Number: ")?;
        match self.registry.update_room(&id, room) {
            Ok(()) => self.console.say("Patient updated successfully!"),
            Err(RegistryError::NotFound(_)) => self.console.say(NOT_FOUND),
        }
    }

    fn delete_patient(&mut self) -> Result<()> {
        let id = self
            .console
            .prompt("patient id", "Enter Patient ID to delete: ")?;

        match self.registry.soft_delete(&id) {
            Ok(()) => self.console.say("Patient deleted successfully!"),
            Err(RegistryError::NotFound(_)) => self.console.say(NOT_FOUND),
        }
    }

    fn generate_bill(&mut self) -> Result<()> {
        let id = self
            .console
            .prompt("patient id", "Enter Patient ID for billing: ")?;

        if self.registry.find_by_id(&id).is_err() {
            return self.console.say(NOT_FOUND);
        }

        let room = self.console.prompt_f64("room charges", "Enter Room Charges: ")?;
        let pharmacy = self
            .console
            .prompt_f64("pharmacy charges", "Enter Pharmacy Charges: ")?;
        let diagnostics = self
            .console
            .prompt_f64("diagnostics charges", "Enter Diagnostics Charges: ")?;

        match self.registry.bill(&id, room, pharmacy, diagnostics) {
            Ok(total) => self
                .console
                .say(&format!("Bill Generated - Total: {}", format_amount(total))),
            Err(RegistryError::NotFound(_)) => self.console.say(NOT_FOUND),
        }
    }
}
