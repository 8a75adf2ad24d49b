//! The [`Paint`] capability and its two concrete variants.

/// Capability for anything an artist can put on a canvas.
///
/// Mirrors [`Easel`](crate::products::Easel): implementors supply the fixed
/// description, the shared `apply` behavior prints it.
pub trait Paint {
    /// The fixed description this paint variant emits.
    fn description(&self) -> &'static str;

    /// Apply the paint, announcing on stdout how it handles.
    fn apply(&self) {
        println!("{}", self.description());
    }
}

/// Oil paint, the professional family's medium.
#[derive(Debug, Default)]
pub struct OilPaint;

impl Paint for OilPaint {
    fn description(&self) -> &'static str {
        "Applying vibrant oil paints"
    }
}

/// Water paint, the beginner family's medium.
#[derive(Debug, Default)]
pub struct WaterPaint;

impl Paint for WaterPaint {
    fn description(&self) -> &'static str {
        "Applying easy-to-use water paints"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_emit_their_fixed_descriptions() {
        assert_eq!(OilPaint.description(), "Applying vibrant oil paints");
        assert_eq!(
            WaterPaint.description(),
            "Applying easy-to-use water paints"
        );
    }
}
