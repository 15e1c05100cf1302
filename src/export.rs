//! Writes the corrected floor plan back out in the geometry XML format, so
//! later runs can load the repaired plan directly.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::building::Building;
use crate::error::Result;
use crate::geometry::Door;

fn push_door(out: &mut String, door: &Door, tag: &str, indent: &str) {
    let s = door.segment();
    let _ = writeln!(
        out,
        "{indent}<{tag} id=\"{}\" caption=\"{}\">",
        door.id(),
        door.caption()
    );
    let _ = writeln!(
        out,
        "{indent}  <vertex px=\"{}\" py=\"{}\"/>",
        s.p1().x,
        s.p1().y
    );
    let _ = writeln!(
        out,
        "{indent}  <vertex px=\"{}\" py=\"{}\"/>",
        s.p2().x,
        s.p2().y
    );
    let _ = writeln!(out, "{indent}</{tag}>");
}

/// Renders the building as a geometry XML document.
#[must_use]
pub fn write_geometry(building: &Building) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
    let _ = writeln!(
        out,
        "<geometry version=\"0.8\" caption=\"{}\" unit=\"m\">",
        building.caption()
    );

    let _ = writeln!(out, "  <rooms>");
    for room in building.rooms() {
        let _ = writeln!(
            out,
            "    <room id=\"{}\" caption=\"{}\">",
            room.id(),
            room.caption()
        );
        for sub in room.subrooms() {
            let _ = writeln!(
                out,
                "      <subroom id=\"{}\" closed=\"0\" class=\"subroom\">",
                sub.subroom_id()
            );
            for wall in sub.walls() {
                let _ = writeln!(out, "        <polygon caption=\"wall\" type=\"{}\">", wall.kind());
                let _ = writeln!(
                    out,
                    "          <vertex px=\"{}\" py=\"{}\"/>",
                    wall.p1().x,
                    wall.p1().y
                );
                let _ = writeln!(
                    out,
                    "          <vertex px=\"{}\" py=\"{}\"/>",
                    wall.p2().x,
                    wall.p2().y
                );
                let _ = writeln!(out, "        </polygon>");
            }
            let _ = writeln!(out, "      </subroom>");
        }
        let _ = writeln!(out, "      <crossings>");
        for door in building.doors().crossings() {
            if door.side1().room_id == room.id() {
                push_door(&mut out, door, "crossing", "        ");
            }
        }
        let _ = writeln!(out, "      </crossings>");
        let _ = writeln!(out, "    </room>");
    }
    let _ = writeln!(out, "  </rooms>");

    let _ = writeln!(out, "  <transitions>");
    for door in building.doors().transitions() {
        push_door(&mut out, door, "transition", "    ");
    }
    let _ = writeln!(out, "  </transitions>");

    let _ = writeln!(out, "</geometry>");
    out
}

/// Writes the geometry XML to `path`.
///
/// # Errors
///
/// Propagates I/O failures.
pub fn save_geometry(building: &Building, path: &Path) -> Result<()> {
    fs::write(path, write_geometry(building))?;
    info!(path = %path.display(), "corrected geometry written");
    Ok(())
}
