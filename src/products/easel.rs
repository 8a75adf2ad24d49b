//! The [`Easel`] capability and its two concrete variants.

/// Capability for anything an artist can set a canvas on.
///
/// Implementors only supply [`description`](Easel::description); the
/// `use_easel` behavior is shared by every variant. Keeping the string
/// separate from the printing makes the variants trivially testable without
/// capturing stdout.
///
/// The method is named `use_easel` because `use` is a Rust keyword.
pub trait Easel: std::fmt::Debug {
    /// The fixed description this easel variant emits.
    fn description(&self) -> &'static str;

    /// Set the easel up, announcing on stdout what it is good for.
    fn use_easel(&self) {
        println!("{}", self.description());
    }
}

/// Studio-grade easel, built for large canvases.
#[derive(Debug, Default)]
pub struct ProfessionalEasel;

impl Easel for ProfessionalEasel {
    fn description(&self) -> &'static str {
        "Using prof easels for larger canvas"
    }
}

/// Tabletop easel for smaller canvases.
#[derive(Debug, Default)]
pub struct ForBeginnersEasel;

impl Easel for ForBeginnersEasel {
    fn description(&self) -> &'static str {
        "Using beginners easels for smaller canvas"
    }
}
