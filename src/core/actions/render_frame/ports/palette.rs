use crate::core::actions::render_frame::ports::escape_time_algorithm::EscapeTime;
use crate::core::data::colour::Colour;

/// Maps an iteration result to a colour. Must depend on nothing but the
/// result and the iteration bound the palette was built for.
pub trait Palette: Send + Sync {
    fn colour(&self, escape: EscapeTime) -> Colour;

    fn display_name(&self) -> &str;
}
