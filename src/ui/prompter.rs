//! Terminal prompts backed by dialoguer
//!
//! Prompts render on stderr so stdout only carries status lines and the
//! device tool's output.

use is_terminal::IsTerminal;

use dialoguer::{Confirm, Select};
use ipa_deploy::{ConfirmRequest, DeployError, DeployResult, Prompter};

use crate::ui::context::UiContext;
use crate::ui::theme::DeployTheme;
use crate::ui::widgets::r#box::Box;

pub struct DialoguerPrompter {
    theme: DeployTheme,
    ui: UiContext,
    interactive: bool,
}

impl DialoguerPrompter {
    pub fn new(ui: UiContext) -> Self {
        Self {
            theme: DeployTheme::new(ui.color, ui.unicode),
            ui,
            interactive: std::io::stdin().is_terminal() && std::io::stderr().is_terminal(),
        }
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, request: &ConfirmRequest<'_>) -> DeployResult<bool> {
        if !self.interactive {
            return Err(DeployError::NotInteractive {
                prompt: request.question.to_string(),
            });
        }

        eprint!("{}", render_checklist(request, self.ui.color, self.ui.unicode));

        Confirm::with_theme(&self.theme)
            .with_prompt(request.question)
            .default(false)
            .wait_for_newline(true)
            .interact()
            .map_err(prompt_io_error)
    }

    fn select(&self, prompt: &str, choices: &[String]) -> DeployResult<usize> {
        if !self.interactive {
            return select_without_terminal(prompt, choices);
        }

        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(choices)
            .interact_opt()
            .map_err(prompt_io_error)?;

        selection.ok_or_else(|| DeployError::PromptCancelled {
            prompt: prompt.to_string(),
        })
    }
}

fn prompt_io_error(err: dialoguer::Error) -> DeployError {
    match err {
        dialoguer::Error::IO(io) => DeployError::Io(io),
    }
}

/// The only candidate is taken as-is; anything else needs a human.
fn select_without_terminal(prompt: &str, choices: &[String]) -> DeployResult<usize> {
    match choices {
        [only] => {
            log::info!("{}: no terminal, using the only choice {}", prompt, only);
            Ok(0)
        }
        _ => Err(DeployError::NotInteractive {
            prompt: prompt.to_string(),
        }),
    }
}

fn render_checklist(request: &ConfirmRequest<'_>, color: bool, unicode: bool) -> String {
    let mut b = Box::with_title(request.title);
    for line in request.lines {
        b.add_line(*line);
    }
    b.render(color, unicode)
}
