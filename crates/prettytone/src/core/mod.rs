mod conversion;
mod difference;
mod equality;
mod gamut;
mod math;
mod space;
mod string;

// conversion
pub(crate) use conversion::{
    convert, from_24bit, from_packed, to_24bit, to_packed, ACHROMATIC_EPSILON,
};

// difference
pub(crate) use difference::delta_e_ok;

// equality
#[cfg(test)]
pub(crate) use equality::{assert_same_coordinates, assert_within};
pub use equality::to_eq_bits;
pub(crate) use equality::{is_achromatic, normalize, to_eq_coordinates};

// gamut
pub use gamut::{ClipMethod, DEFAULT_CLIP_ALPHA};
pub(crate) use gamut::{clip, clip_to_linear_srgb, in_gamut};

// math
pub(crate) use math::FloatExt;

// space
pub use space::ColorSpace;

// string
pub(crate) use string::{format, parse};
