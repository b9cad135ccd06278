use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("A carousel needs at least one item.")]
    Empty,
    #[error("A carousel must show at least one item at a time.")]
    ZeroWindow,
}

/// Rotating index over `total` items, showing `window` of them at once.
///
/// The index lives in an atomic so concurrent requests never lose an update;
/// the owner decides the scope (one per process, session, ...).
#[derive(Debug)]
pub struct Carousel {
    index: AtomicUsize,
    total: usize,
    window: usize,
}

/// What a single request gets to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView {
    pub index: usize,
    /// 1-based item numbers, first one is the featured item.
    pub items: Vec<usize>,
}

impl Carousel {
    pub fn new(total: usize, window: usize) -> Result<Self, CarouselError> {
        if total == 0 {
            return Err(CarouselError::Empty);
        }
        if window == 0 {
            return Err(CarouselError::ZeroWindow);
        }

        Ok(Self {
            index: AtomicUsize::new(0),
            total,
            window,
        })
    }

    pub fn index(&self) -> usize {
        self.index.load(Ordering::Acquire)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Moves the index by `offset` positions, wrapping in both directions, and
    /// returns the new index.
    pub fn advance(&self, offset: i64) -> usize {
        if offset == 0 {
            return self.index();
        }

        // `total` is tiny in practice; reducing first keeps the sum in range.
        let total = self.total as i64;
        let step = offset.rem_euclid(total) as usize;

        let previous = self
            .index
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |index| {
                Some((index + step) % self.total)
            })
            .unwrap_or_else(|index| index);

        (previous + step) % self.total
    }

    /// Item numbers shown when the carousel sits at `start`.
    pub fn window_at(&self, start: usize) -> Vec<usize> {
        (0..self.window)
            .map(|i| (start + i) % self.total + 1)
            .collect()
    }

    pub fn view(&self, offset: i64) -> CarouselView {
        let index = self.advance(offset);
        CarouselView {
            index,
            items: self.window_at(index),
        }
    }
}
