use crate::{error::TrailError, Coords};

/// The snake's body, newest segment first.
///
/// The logical length is the number of slots; a slot stays `None` until
/// the head has moved often enough to fill it. Only `shift_insert` and
/// `grow` mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trail {
    segments: Vec<Option<Coords>>,
}

impl Trail {
    /// A one-slot trail with room reserved for `capacity` segments.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut segments = Vec::with_capacity(capacity.max(1));
        segments.push(None);
        Trail { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Drops the oldest slot, moves the rest back by one and puts
    /// `new_head` in front.
    pub fn shift_insert(&mut self, new_head: Coords) {
        if self.segments.is_empty() {
            return;
        }

        self.segments.rotate_right(1);
        self.segments[0] = Some(new_head);
    }

    /// Extends the trail to `new_len` slots. Existing segments keep their
    /// order; the new slots are unplaced.
    pub fn grow(&mut self, new_len: usize) -> Result<(), TrailError> {
        if new_len <= self.segments.len() {
            return Ok(());
        }

        self.segments
            .try_reserve(new_len - self.segments.len())
            .map_err(|_| TrailError::Exhausted { requested: new_len })?;
        self.segments.resize(new_len, None);
        Ok(())
    }

    /// Placed segments, newest first.
    pub fn iter(&self) -> impl Iterator<Item = Coords> + '_ {
        self.segments.iter().flatten().copied()
    }

    pub fn contains(&self, pos: Coords) -> bool {
        self.iter().any(|c| c == pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(y: i32, x: i32) -> Coords {
        Coords::new(y, x)
    }

    #[test]
    fn starts_with_one_unplaced_slot() {
        let trail = Trail::with_capacity(10);
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.iter().count(), 0);
    }

    #[test]
    fn shift_insert_keeps_the_length() {
        let mut trail = Trail::with_capacity(10);
        trail.shift_insert(c(1, 1));
        trail.shift_insert(c(1, 2));

        assert_eq!(trail.len(), 1);
        assert_eq!(trail.iter().collect::<Vec<_>>(), vec![c(1, 2)]);
    }

    #[test]
    fn grow_preserves_order_and_leaves_a_gap() {
        let mut trail = Trail::with_capacity(10);
        trail.shift_insert(c(1, 1));
        trail.grow(3).unwrap();

        assert_eq!(trail.len(), 3);
        assert_eq!(trail.iter().collect::<Vec<_>>(), vec![c(1, 1)]);

        trail.shift_insert(c(1, 2));
        trail.shift_insert(c(1, 3));
        assert_eq!(trail.iter().collect::<Vec<_>>(), vec![c(1, 3), c(1, 2), c(1, 1)]);

        // full now, the oldest one falls off
        trail.shift_insert(c(1, 4));
        assert_eq!(trail.iter().collect::<Vec<_>>(), vec![c(1, 4), c(1, 3), c(1, 2)]);
        assert!(!trail.contains(c(1, 1)));
    }

    #[test]
    fn grow_never_shrinks() {
        let mut trail = Trail::with_capacity(4);
        trail.grow(4).unwrap();
        trail.grow(2).unwrap();
        assert_eq!(trail.len(), 4);
    }
}
