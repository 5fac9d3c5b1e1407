//! Little-endian cursor over a byte slice.
//!
//! Callers validate lengths up front, so reads past the end are reported as
//! `None` rather than panicking but are not expected on the decode paths.

use crate::types::{Point, Triangle};

pub(crate) struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.buf.get(self.pos..self.pos + N)?;
        self.pos += N;
        bytes.try_into().ok()
    }

    #[inline]
    pub(crate) fn u32(&mut self) -> Option<u32> {
        self.take::<4>().map(u32::from_le_bytes)
    }

    #[inline]
    pub(crate) fn f32(&mut self) -> Option<f32> {
        self.take::<4>().map(f32::from_le_bytes)
    }

    /// Two `f32` coordinates widened to a `Point`.
    #[inline]
    pub(crate) fn point(&mut self) -> Option<Point> {
        let x = self.f32()?;
        let y = self.f32()?;
        Some(Point::new(f64::from(x), f64::from(y)))
    }

    #[inline]
    pub(crate) fn triangle(&mut self) -> Option<Triangle> {
        Some([self.u32()?, self.u32()?, self.u32()?])
    }
}
