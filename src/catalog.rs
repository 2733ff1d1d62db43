//! The fixed module catalog.
//!
//! Three category trees cover everything the generated config can show.
//! The shape is a literal: nothing here comes from external input. The
//! probe decides which parts of it survive on a given machine.

use serde_json::json;

use crate::theme::palette;
use crate::tree::Node;

/// Schema the generated document declares.
pub const SCHEMA_URL: &str =
    "https://github.com/fastfetch-cli/fastfetch/raw/dev/doc/json_schema.json";

/// Kinds that are never pruned even when the probe reports an error.
///
/// Category headers are `custom` entries that render literal text; a
/// dry run has nothing to resolve for them.
pub const EXEMPT_KINDS: &[&str] = &["custom"];

/// Build the full module forest.
pub fn default_forest() -> Vec<Node> {
    vec![software(), hardware(), miscellaneous()]
}

fn software() -> Node {
    Node::new("custom", "Software")
        .color(palette::SOFTWARE)
        .with_children([
            Node::new("os", "OS")
                .color(palette::OS)
                .format("{3} {12}")
                .with_children([
                    Node::new("kernel", "Kernel"),
                    Node::new("command", "Init").text("ps -p 1 -o comm="),
                    Node::new("packages", "Packages"),
                    Node::new("shell", "Shell"),
                ]),
            Node::new("terminal", "Terminal")
                .color(palette::TERMINAL)
                .with_children([
                    Node::new("terminalfont", "Font"),
                    Node::new("terminalsize", "Size"),
                ]),
            Node::new("display", "Display")
                .color(palette::GRAPHICS)
                .with_children([
                    Node::new("de", "DE"),
                    Node::new("wm", "WM"),
                    Node::new("wmtheme", "WM Theme"),
                    Node::new("theme", "Theme"),
                    Node::new("icons", "Icons"),
                    Node::new("cursor", "Cursor"),
                ]),
            Node::new("editor", "Editor").color(palette::DEVELOPMENT),
        ])
}

fn hardware() -> Node {
    Node::new("custom", "Hardware")
        .color(palette::HARDWARE)
        .with_children([
            Node::new("host", "Host")
                .color(palette::CHASSIS)
                .with_children([
                    Node::new("chassis", "Chassis"),
                    Node::new("bios", "BIOS"),
                ]),
            Node::new("cpu", "CPU").format("{1} ({3}) @ {7}"),
            Node::new("gpu", "GPU"),
            Node::new("memory", "Memory"),
            Node::new("swap", "Swap"),
            Node::new("disk", "Disk").extra(json!({"folders": "/"})),
            Node::new("battery", "Battery"),
            Node::new("poweradapter", "Power Adapter"),
        ])
}

fn miscellaneous() -> Node {
    Node::new("custom", "Miscellaneous")
        .color(palette::MISCELLANEOUS)
        .with_children([
            Node::new("uptime", "Uptime"),
            Node::new("locale", "Locale"),
            Node::new("localip", "Local IP").extra(json!({"showIpv4": true, "compact": true})),
            Node::new("colors", "Colors").extra(json!({"symbol": "circle"})),
        ])
}
