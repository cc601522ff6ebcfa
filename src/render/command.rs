//! Recorded draw commands and their one-line text format.

use super::DrawingSurface;
use crate::model::{CodeBlockBackground, Divider, FontDescriptor, ImageElement, TextRun};
use crate::view_state::ViewportDimensions;
use serde::Serialize;
use std::fmt;

/// A single paint operation in viewport space.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Surface erased.
    Clear {
        /// Logical width.
        width: u32,
        /// Logical height.
        height: u32,
        /// Device pixel ratio reported by the surface.
        device_pixel_ratio: f64,
    },
    /// Text run painted.
    Text {
        /// Visible text.
        content: String,
        /// CSS font shorthand.
        font: String,
        /// CSS color.
        color: String,
        /// Left edge.
        x: u32,
        /// Top edge, viewport-relative.
        y: i64,
        /// Slanted style requested.
        italic: bool,
    },
    /// Image painted (or its reserved box, while pending).
    Image {
        /// Source URL.
        src: String,
        /// Left edge.
        x: u32,
        /// Top edge, viewport-relative.
        y: i64,
        /// Laid-out width.
        width: u32,
        /// Laid-out height.
        height: u32,
        /// Natural size was known at layout time.
        ready: bool,
    },
    /// Horizontal rule stroked.
    Divider {
        /// Left edge.
        x: u32,
        /// Rule position, viewport-relative.
        y: i64,
        /// Rule length.
        width: u32,
    },
    /// Code block background filled.
    CodeBackground {
        /// Left edge.
        x: u32,
        /// Top edge, viewport-relative.
        y: i64,
        /// Rectangle width.
        width: u32,
        /// Rectangle height.
        height: u32,
    },
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Clear {
                width,
                height,
                device_pixel_ratio,
            } => write!(f, "clear {width}x{height} dpr={device_pixel_ratio}"),
            DrawCommand::Text {
                content,
                font,
                color,
                x,
                y,
                italic,
            } => {
                write!(f, "text x={x} y={y} font=\"{font}\" color={color}")?;
                if *italic {
                    f.write_str(" italic")?;
                }
                write!(f, " {content:?}")
            }
            DrawCommand::Image {
                src,
                x,
                y,
                width,
                height,
                ready,
            } => {
                let state = if *ready { "ready" } else { "pending" };
                write!(
                    f,
                    "image x={x} y={y} width={width} height={height} src={src} {state}"
                )
            }
            DrawCommand::Divider { x, y, width } => write!(f, "divider x={x} y={y} width={width}"),
            DrawCommand::CodeBackground {
                x,
                y,
                width,
                height,
            } => write!(f, "code_background x={x} y={y} width={width} height={height}"),
        }
    }
}

/// Join commands in their text format, one per line.
pub fn format_commands(commands: &[DrawCommand]) -> String {
    commands
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drawing surface that records what it is asked to paint.
#[derive(Debug, Clone)]
pub struct CommandRecorder {
    dimensions: ViewportDimensions,
    device_pixel_ratio: f64,
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    /// Recorder for a surface of the given size at 1x.
    pub fn new(dimensions: ViewportDimensions) -> Self {
        Self {
            dimensions,
            device_pixel_ratio: 1.0,
            commands: Vec::new(),
        }
    }

    /// Override the reported device pixel ratio.
    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    /// Commands recorded since the last clear.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands.
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl DrawingSurface for CommandRecorder {
    fn dimensions(&self) -> ViewportDimensions {
        self.dimensions
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear {
            width: self.dimensions.width,
            height: self.dimensions.height,
            device_pixel_ratio: self.device_pixel_ratio,
        });
    }

    fn draw_text(&mut self, run: &TextRun, font: &FontDescriptor, y: i64) {
        self.commands.push(DrawCommand::Text {
            content: run.content.clone(),
            font: font.to_string(),
            color: run.color.clone(),
            x: run.x,
            y,
            italic: run.italic,
        });
    }

    fn draw_image(&mut self, image: &ImageElement, y: i64) {
        self.commands.push(DrawCommand::Image {
            src: image.source_url.clone(),
            x: image.x,
            y,
            width: image.width,
            height: image.height,
            ready: image.ready,
        });
    }

    fn draw_divider(&mut self, divider: &Divider, y: i64) {
        self.commands.push(DrawCommand::Divider {
            x: divider.x,
            y,
            width: divider.width,
        });
    }

    fn fill_code_background(&mut self, background: &CodeBlockBackground, y: i64) {
        self.commands.push(DrawCommand::CodeBackground {
            x: background.x,
            y,
            width: background.width,
            height: background.height,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_format_quotes_content_and_marks_italic() {
        let command = DrawCommand::Text {
            content: "Some \"text\"".to_string(),
            font: "400 18px sans-serif".to_string(),
            color: "#333333".to_string(),
            x: 150,
            y: 12,
            italic: true,
        };
        assert_eq!(
            command.to_string(),
            r#"text x=150 y=12 font="400 18px sans-serif" color=#333333 italic "Some \"text\"""#
        );
    }

    #[test]
    fn image_format_reports_pending() {
        let command = DrawCommand::Image {
            src: "logo.png".to_string(),
            x: 150,
            y: -20,
            width: 700,
            height: 350,
            ready: false,
        };
        assert_eq!(
            command.to_string(),
            "image x=150 y=-20 width=700 height=350 src=logo.png pending"
        );
    }

    #[test]
    fn json_uses_op_tag() {
        let command = DrawCommand::Divider {
            x: 1,
            y: 2,
            width: 3,
        };
        let json = serde_json::to_string(&command).unwrap();
        assert_eq!(json, r#"{"op":"divider","x":1,"y":2,"width":3}"#);
    }

    #[test]
    fn clear_resets_recording() {
        let mut recorder =
            CommandRecorder::new(ViewportDimensions::new(640, 480)).with_device_pixel_ratio(2.0);
        recorder.draw_divider(
            &Divider {
                x: 0,
                y: 0,
                width: 1,
            },
            0,
        );
        recorder.clear();
        assert_eq!(
            format_commands(recorder.commands()),
            "clear 640x480 dpr=2"
        );
    }
}
