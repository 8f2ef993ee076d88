//! JSON command protocol for scripted editing.
//!
//! Each command is one JSON object tagged by `"command"`; responses carry optional data.

use serde::{Deserialize, Serialize};
use shared::{Rect, Rgba};

use crate::harness::TestHarness;
use crate::ops::PixelPaint;

fn default_fill() -> Rgba {
    Rgba::TRANSPARENT
}

/// A command a script or agent can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AgentCommand {
    /// Paint individual pixels as one undo step
    SetPixels {
        pixels: Vec<PixelPaint>,
    },
    /// Fill a rectangle with a color
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    /// Select a rectangle, then fill the selection (one undo step)
    FillSelection {
        rect: Rect,
        color: Rgba,
    },
    /// Resize the canvas
    Resize {
        width: u32,
        height: u32,
        #[serde(default = "default_fill")]
        fill: Rgba,
    },
    /// Change the selection; omit `rect` to select everything
    Select {
        #[serde(default)]
        rect: Option<Rect>,
    },
    /// Undo the last operation.
    Undo,
    /// Redo the last undone operation.
    Redo,
    /// Undo `n + 1` operations.
    UndoUpTo {
        n: usize,
    },
    /// Redo `n + 1` operations.
    RedoUpTo {
        n: usize,
    },
    /// Save the document, to `path` or to where it was last saved.
    Save {
        #[serde(default)]
        path: Option<String>,
    },
    /// Read one pixel.
    Pixel {
        x: u32,
        y: u32,
    },
    /// Describe the undo/redo stacks.
    History,
    /// Describe the document.
    Inspect,
    /// Change retention limits; omitted fields keep their value.
    SetLimits {
        #[serde(default)]
        min_limit: Option<usize>,
        #[serde(default)]
        max_limit: Option<usize>,
        #[serde(default)]
        size_limit: Option<usize>,
    },
    /// Drop the whole undo/redo history.
    ClearHistory,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

fn history_data(harness: &TestHarness) -> serde_json::Value {
    let history = harness.app.document.history();
    serde_json::json!({
        "undo": harness.undo_names(),
        "redo": harness.redo_names(),
        "undo_len": history.undo_len(),
        "redo_len": history.redo_len(),
        "undo_label": history.undo_label(),
        "redo_label": history.redo_label(),
        "total_size": history.total_size(),
        "restored_position": history.restored_position(),
        "modified": history.is_modified(),
        "version": history.version(),
        "limits": history.limits(),
    })
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: AgentCommand) -> CommandResponse {
    match cmd {
        AgentCommand::SetPixels { pixels } => {
            harness.set_pixels(pixels);
            CommandResponse::ok()
        }

        AgentCommand::FillRect { rect, color } => {
            harness.fill_rect(rect, color);
            CommandResponse::ok()
        }

        AgentCommand::FillSelection { rect, color } => {
            harness.fill_selection(rect, color);
            CommandResponse::ok()
        }

        AgentCommand::Resize {
            width,
            height,
            fill,
        } => match harness.resize(width, height, fill) {
            Ok(()) => CommandResponse::ok(),
            Err(e) => CommandResponse::err(e.to_string()),
        },

        AgentCommand::Select { rect } => {
            harness.select(rect);
            CommandResponse::ok()
        }

        AgentCommand::Undo => {
            let success = harness.undo();
            CommandResponse::ok_with_data(serde_json::json!({ "undone": success }))
        }

        AgentCommand::Redo => {
            let success = harness.redo();
            CommandResponse::ok_with_data(serde_json::json!({ "redone": success }))
        }

        AgentCommand::UndoUpTo { n } => {
            let steps = harness.undo_up_to(n);
            CommandResponse::ok_with_data(serde_json::json!({ "undone": steps }))
        }

        AgentCommand::RedoUpTo { n } => {
            let steps = harness.redo_up_to(n);
            CommandResponse::ok_with_data(serde_json::json!({ "redone": steps }))
        }

        AgentCommand::Save { path } => {
            match harness.save(path.as_deref().map(std::path::Path::new)) {
                Ok(saved) => CommandResponse::ok_with_data(
                    serde_json::json!({ "path": saved.display().to_string() }),
                ),
                Err(e) => CommandResponse::err(e.to_string()),
            }
        }

        AgentCommand::Pixel { x, y } => match harness.pixel(x, y) {
            Some(color) => CommandResponse::ok_with_data(serde_json::json!({ "color": color })),
            None => CommandResponse::err(format!("Pixel ({x}, {y}) is outside the canvas")),
        },

        AgentCommand::History => CommandResponse::ok_with_data(history_data(harness)),

        AgentCommand::Inspect => {
            let doc = harness.document();
            CommandResponse::ok_with_data(serde_json::json!({
                "width": doc.canvas.width(),
                "height": doc.canvas.height(),
                "selection": doc.selection,
                "modified": harness.modified(),
                "path": harness.app.document.path.as_ref().map(|p| p.display().to_string()),
            }))
        }

        AgentCommand::SetLimits {
            min_limit,
            max_limit,
            size_limit,
        } => {
            let current = *harness.app.document.history().limits();
            let requested = history::HistoryLimits {
                min_limit: min_limit.unwrap_or(current.min_limit),
                max_limit: max_limit.unwrap_or(current.max_limit),
                size_limit: size_limit.unwrap_or(current.size_limit),
            };
            let applied = harness.set_limits(requested);
            CommandResponse::ok_with_data(serde_json::json!({
                "applied": applied,
                "limits": harness.app.document.history().limits(),
            }))
        }

        AgentCommand::ClearHistory => {
            harness.clear_history();
            CommandResponse::ok()
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: AgentCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<AgentCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
