//! Line-oriented front end over [`UserViewModel`].
//!
//! The shell is the boundary that shows alerts and asks for delete
//! confirmation; the view-model itself never blocks on the user.

use crate::command::{Command, DraftField, HELP};
use crate::error::Result as BoardErrorResult;

use std::io::{BufRead, Write};

use log::{debug, warn};
use ub_core::{Confirmation, DeleteOutcome, User, UserRole, UserViewModel};

pub const EDIT_IN_PROGRESS_MESSAGE: &str = "Save or cancel the current edit first";

pub struct Shell<R, W> {
    view_model: UserViewModel,
    input: R,
    output: W,
    auto_confirm: bool,
    json: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(view_model: UserViewModel, input: R, output: W) -> Self {
        Self {
            view_model,
            input,
            output,
            auto_confirm: false,
            json: false,
        }
    }

    /// Skip the delete confirmation prompt.
    pub fn auto_confirm(mut self, yes: bool) -> Self {
        self.auto_confirm = yes;
        self
    }

    /// Print listings as JSON instead of a table.
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn view_model(&self) -> &UserViewModel {
        &self.view_model
    }

    pub fn into_parts(self) -> (UserViewModel, W) {
        (self.view_model, self.output)
    }

    /// Read and execute commands until `quit` or end of input.
    pub fn run(&mut self) -> BoardErrorResult<()> {
        writeln!(self.output, "User board. Type 'help' for commands.")?;

        loop {
            let prompt = if self.view_model.is_editing() {
                "edit> "
            } else {
                "> "
            };
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(e) => {
                    debug!("Rejected input {line:?}: {e}");
                    writeln!(self.output, "{e}")?;
                }
            }
        }

        Ok(())
    }

    fn read_line(&mut self) -> BoardErrorResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn execute(&mut self, command: Command) -> BoardErrorResult<()> {
        match command {
            Command::List => self.print_users()?,
            Command::Stats => self.print_stats()?,
            Command::Filter(filter) => {
                self.view_model.set_filter(filter);
                writeln!(self.output, "Filter: {filter}")?;
            }
            Command::Add(_) if self.view_model.is_editing() => {
                writeln!(self.output, "{EDIT_IN_PROGRESS_MESSAGE}")?;
            }
            Command::Add(fields) => {
                if let Some((name, email, role)) = fields {
                    let draft = self.view_model.draft_mut();
                    draft.name = name;
                    draft.email = email;
                    draft.role = role;
                }
                match self.view_model.add_user() {
                    Ok(user) => writeln!(self.output, "Added #{} {}", user.id, user.name)?,
                    Err(e) => writeln!(self.output, "{}", e.user_message())?,
                }
            }
            Command::Set(field) => {
                let draft = self.view_model.draft_mut();
                match field {
                    DraftField::Name(name) => draft.name = name,
                    DraftField::Email(email) => draft.email = email,
                    DraftField::Role(role) => draft.role = role,
                }
                self.print_draft()?;
            }
            Command::Draft => self.print_draft()?,
            Command::Edit(id) => {
                if self.view_model.start_edit(id) {
                    writeln!(self.output, "Editing #{id}")?;
                    self.print_draft()?;
                } else {
                    writeln!(self.output, "No user #{id}")?;
                }
            }
            Command::Save => match self.view_model.update_user() {
                Some(user) => writeln!(self.output, "Updated #{} {}", user.id, user.name)?,
                None => writeln!(self.output, "Nothing is being edited")?,
            },
            Command::Cancel => {
                self.view_model.cancel_edit();
                writeln!(self.output, "Draft cleared")?;
            }
            Command::Toggle(id) => match self.view_model.toggle_active(id) {
                Some(active) => {
                    let status = if active { "active" } else { "inactive" };
                    writeln!(self.output, "#{id} is now {status}")?;
                }
                None => writeln!(self.output, "No user #{id}")?,
            },
            Command::Delete(id) => self.delete(id)?,
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn delete(&mut self, id: i64) -> BoardErrorResult<()> {
        let DeleteOutcome::ConfirmationRequired(pending) = self.view_model.delete_user(id) else {
            writeln!(self.output, "No user #{id}")?;
            return Ok(());
        };

        let confirmation = if self.auto_confirm {
            Confirmation::Confirmed
        } else {
            write!(
                self.output,
                "Are you sure you want to delete {}? [y/N] ",
                pending.name()
            )?;
            self.output.flush()?;
            let answer = self.read_line()?.unwrap_or_default();
            Confirmation::from(matches!(
                answer.trim().to_lowercase().as_str(),
                "y" | "yes"
            ))
        };

        match self.view_model.confirm_delete(pending, confirmation) {
            DeleteOutcome::Deleted(user) => writeln!(self.output, "Deleted #{}", user.id)?,
            DeleteOutcome::Declined => writeln!(self.output, "Kept #{id}")?,
            other => {
                warn!("Unexpected delete outcome for #{id}: {other:?}");
                writeln!(self.output, "No user #{id}")?;
            }
        }
        Ok(())
    }

    fn print_users(&mut self) -> BoardErrorResult<()> {
        let users = self.view_model.filtered_users();

        if self.json {
            let json = serde_json::to_string_pretty(&users).map_err(std::io::Error::other)?;
            writeln!(self.output, "{json}")?;
            return Ok(());
        }

        if users.is_empty() {
            writeln!(self.output, "(no users)")?;
            return Ok(());
        }
        for user in users {
            writeln!(self.output, "{}", format_row(user))?;
        }
        Ok(())
    }

    fn print_stats(&mut self) -> BoardErrorResult<()> {
        let vm = &self.view_model;
        writeln!(
            self.output,
            "Total: {}  Active: {} ({}%)",
            vm.total(),
            vm.active_count(),
            vm.active_percentage()
        )?;
        for role in UserRole::ALL {
            let stats = vm.role_stats(role);
            writeln!(
                self.output,
                "  {:<5} {} ({} active)",
                role, stats.count, stats.active
            )?;
        }
        Ok(())
    }

    fn print_draft(&mut self) -> BoardErrorResult<()> {
        let draft = self.view_model.draft();
        writeln!(
            self.output,
            "Draft: name={:?} email={:?} role={}",
            draft.name, draft.email, draft.role
        )?;
        Ok(())
    }
}

fn format_row(user: &User) -> String {
    let status = if user.active { "active" } else { "inactive" };
    format!(
        "#{:<14} {:<28} {:<24} {:<5} {:<8} {}",
        user.id,
        user.name,
        user.email,
        user.role,
        status,
        user.created_at_display()
    )
}
