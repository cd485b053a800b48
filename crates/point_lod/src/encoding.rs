//! Compact 16-bit encodings for aggregated node appearance.
//!
//! Both encodings are lossy and stateless:
//!
//! ```text
//! Color16      rrrrrr gggggg bbbb        6/6/4 bits
//! PolarNormal  theta(u8) phi(u8)         inclination / azimuth
//! ```
//!
//! `PolarNormal::EMPTY` (theta = 0, phi = 0) is reserved to mean "no normal".
//! The encoder never produces it for a real normal.

use std::f32::consts::PI;

use glam::Vec3;

/// Maximum value of the 6-bit red and green channels.
const MAX_6BIT: f32 = 63.0;

/// Maximum value of the 4-bit blue channel.
const MAX_4BIT: f32 = 15.0;

/// RGB color packed into 16 bits: 6 bits red, 6 bits green, 4 bits blue.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color16(u16);

impl Color16 {
  /// Black, also used for directions without data.
  pub const BLACK: Self = Self(0);

  /// Quantize an 8-bit RGB triple.
  #[inline]
  pub fn from_rgb(rgb: [u8; 3]) -> Self {
    let r = quantize(rgb[0], MAX_6BIT);
    let g = quantize(rgb[1], MAX_6BIT);
    let b = quantize(rgb[2], MAX_4BIT);
    Self((r << 10) | (g << 4) | b)
  }

  /// Wrap raw packed bits.
  #[inline]
  pub const fn from_bits(bits: u16) -> Self {
    Self(bits)
  }

  /// Raw packed bits.
  #[inline]
  pub const fn bits(self) -> u16 {
    self.0
  }

  /// Quantized red channel [0, 63].
  #[inline]
  pub const fn red6(self) -> u8 {
    (self.0 >> 10) as u8 & 0x3F
  }

  /// Quantized green channel [0, 63].
  #[inline]
  pub const fn green6(self) -> u8 {
    (self.0 >> 4) as u8 & 0x3F
  }

  /// Quantized blue channel [0, 15].
  #[inline]
  pub const fn blue4(self) -> u8 {
    self.0 as u8 & 0x0F
  }

  /// Expand back to 8 bits per channel.
  #[inline]
  pub fn to_rgb(self) -> [u8; 3] {
    [
      dequantize(self.red6(), MAX_6BIT),
      dequantize(self.green6(), MAX_6BIT),
      dequantize(self.blue4(), MAX_4BIT),
    ]
  }
}

impl From<[u8; 3]> for Color16 {
  fn from(rgb: [u8; 3]) -> Self {
    Self::from_rgb(rgb)
  }
}

#[inline(always)]
fn quantize(channel: u8, max: f32) -> u16 {
  (max * (channel as f32 / 255.0)).round() as u16
}

#[inline(always)]
fn dequantize(value: u8, max: f32) -> u8 {
  (255.0 * (value as f32 / max)).round().clamp(0.0, 255.0) as u8
}

/// Unit normal in polar form.
///
/// - `theta`: inclination, 0 = +Z, 255 = -Z
/// - `phi`: azimuth, 0 = -PI, 255 = +PI
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PolarNormal {
  pub theta: u8,
  pub phi: u8,
}

impl PolarNormal {
  /// Sentinel for "no normal". Decodes to the zero vector.
  pub const EMPTY: Self = Self { theta: 0, phi: 0 };

  /// Azimuth substituted when a real normal would collide with `EMPTY`.
  /// At theta = 0 the azimuth has no visible effect.
  pub const COLLISION_PHI: u8 = 128;

  /// Encode a normal. The input does not need to be unit length.
  ///
  /// Zero-length or non-finite input encodes to `EMPTY`.
  pub fn encode(normal: Vec3) -> Self {
    let n = normal.normalize_or_zero();
    if n == Vec3::ZERO {
      return Self::EMPTY;
    }

    let theta = (255.0 * (n.z.clamp(-1.0, 1.0).acos() / PI)).round() as u8;
    let mut phi = (127.5 + 127.5 * (n.y.atan2(n.x) / PI))
      .round()
      .clamp(0.0, 255.0) as u8;

    if theta == 0 && phi == 0 {
      phi = Self::COLLISION_PHI;
    }

    Self { theta, phi }
  }

  /// Decode to a unit vector, or the zero vector for `EMPTY`.
  pub fn decode(self) -> Vec3 {
    if self.is_empty() {
      return Vec3::ZERO;
    }

    let t = PI * (self.theta as f32 / 255.0);
    let p = PI * ((self.phi as f32 / 127.5) - 1.0);
    let (sin_t, cos_t) = t.sin_cos();
    let (sin_p, cos_p) = p.sin_cos();
    Vec3::new(sin_t * cos_p, sin_t * sin_p, cos_t)
  }

  /// Check for the "no normal" sentinel.
  #[inline]
  pub fn is_empty(self) -> bool {
    self == Self::EMPTY
  }

  /// Pack as `theta << 8 | phi`.
  #[inline]
  pub const fn to_bits(self) -> u16 {
    ((self.theta as u16) << 8) | self.phi as u16
  }

  /// Unpack from `theta << 8 | phi`.
  #[inline]
  pub const fn from_bits(bits: u16) -> Self {
    Self {
      theta: (bits >> 8) as u8,
      phi: bits as u8,
    }
  }
}

impl From<Vec3> for PolarNormal {
  fn from(normal: Vec3) -> Self {
    Self::encode(normal)
  }
}

#[cfg(test)]
#[path = "encoding_test.rs"]
mod encoding_test;
