//! Zentrale Konfiguration für den Graph Sketch Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Node-Rendering ─────────────────────────────────────────────────

/// Node-Radius in Welteinheiten.
pub const NODE_RADIUS_WORLD: f32 = 9.0;
/// Standard-Farbe normaler Nodes (RGBA: Cyan).
pub const NODE_COLOR_DEFAULT: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe für den Node im Start-Slot (RGBA: Grün).
pub const NODE_COLOR_START: [f32; 4] = [0.2, 0.9, 0.2, 1.0];
/// Farbe für den Node im Ziel-Slot (RGBA: Orange).
pub const NODE_COLOR_END: [f32; 4] = [1.0, 0.5, 0.1, 1.0];

// ── Kanten-Rendering ───────────────────────────────────────────────

/// Kantenfarbe (RGBA: Hellgrau).
pub const EDGE_COLOR: [f32; 4] = [0.75, 0.75, 0.75, 1.0];
/// Linienstärke der Kanten in Welteinheiten.
pub const EDGE_THICKNESS_WORLD: f32 = 1.5;
/// Pfeil-Länge in Welteinheiten.
pub const ARROW_LENGTH_WORLD: f32 = 8.0;
/// Pfeil-Breite in Welteinheiten.
pub const ARROW_WIDTH_WORLD: f32 = 5.0;

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln.
pub const PICK_RADIUS_PX: f32 = 12.0;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `graph_sketch_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Nodes ───────────────────────────────────────────────────
    /// Node-Radius in Welteinheiten
    pub node_radius_world: f32,
    /// Standard-Farbe normaler Nodes (RGBA)
    pub node_color_default: [f32; 4],
    /// Farbe für den Node im Start-Slot
    pub node_color_start: [f32; 4],
    /// Farbe für den Node im Ziel-Slot
    pub node_color_end: [f32; 4],

    // ── Kanten ──────────────────────────────────────────────────
    /// Kantenfarbe (RGBA)
    pub edge_color: [f32; 4],
    /// Linienstärke der Kanten in Welteinheiten
    pub edge_thickness_world: f32,
    /// Pfeil-Länge in Welteinheiten
    pub arrow_length_world: f32,
    /// Pfeil-Breite in Welteinheiten
    pub arrow_width_world: f32,

    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Radius für Klick-Selektion in Screen-Pixeln
    pub pick_radius_px: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            node_radius_world: NODE_RADIUS_WORLD,
            node_color_default: NODE_COLOR_DEFAULT,
            node_color_start: NODE_COLOR_START,
            node_color_end: NODE_COLOR_END,
            edge_color: EDGE_COLOR,
            edge_thickness_world: EDGE_THICKNESS_WORLD,
            arrow_length_world: ARROW_LENGTH_WORLD,
            arrow_width_world: ARROW_WIDTH_WORLD,
            pick_radius_px: PICK_RADIUS_PX,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("graph_sketch_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("graph_sketch_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip() {
        let mut opts = EditorOptions::default();
        opts.pick_radius_px = 20.0;
        opts.node_color_start = [1.0, 0.0, 0.0, 1.0];

        let content = toml::to_string_pretty(&opts).expect("Serialisierung sollte klappen");
        let back: EditorOptions = toml::from_str(&content).expect("Parsen sollte klappen");
        assert_eq!(back, opts);
    }

    #[test]
    fn test_fehlende_datei_liefert_defaults() {
        let opts =
            EditorOptions::load_from_file(std::path::Path::new("/nonexistent/graph_sketch.toml"));
        assert_eq!(opts, EditorOptions::default());
    }

    #[test]
    fn test_fehlerhafte_datei_liefert_defaults() {
        let path = std::env::temp_dir().join(format!(
            "graph_sketch_editor_broken_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "node_radius_world = \"kein float\"\n[kaputt")
            .expect("Testdatei sollte schreibbar sein");

        let opts = EditorOptions::load_from_file(&path);
        assert_eq!(opts, EditorOptions::default());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_und_load_ueber_datei() {
        let path = std::env::temp_dir().join(format!(
            "graph_sketch_editor_roundtrip_{}.toml",
            std::process::id()
        ));

        let mut opts = EditorOptions::default();
        opts.pick_radius_px = 17.0;
        opts.edge_thickness_world = 2.5;
        opts.save_to_file(&path).expect("Speichern sollte klappen");

        let back = EditorOptions::load_from_file(&path);
        assert_eq!(back, opts);

        let _ = std::fs::remove_file(&path);
    }
}
