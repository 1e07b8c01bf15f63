//! A fixed-size ring of generations.

use std::array;

/// Compile-time checks on the offsets of a [`RotatingBuffer`].
struct Offset<const K: usize, const M: usize, const N: usize>;

impl<const K: usize, const M: usize, const N: usize> Offset<K, M, N> {
    /// `K` denotes a slot.
    const IN_RANGE: () = assert!(K < N, "offset out of range for the buffer");

    /// `K` and `M` denote two different slots.
    const DISTINCT: () = assert!(
        K < N && M < N && K != M,
        "offsets must be different and in range for the buffer"
    );
}

/// A ring of `N` values of the same type with a movable "current" cursor.
///
/// Slots are addressed relative to the cursor with a constant offset:
/// [`get::<0>()`](RotatingBuffer::get) is the current generation,
/// [`get::<1>()`](RotatingBuffer::get) is the one that will become current
/// after the next [`timestep`](RotatingBuffer::timestep), and so on.
/// Offsets are checked at compile time.
///
/// Slots are never moved or reallocated by the rotation,
/// only their roles change.
///
/// ```
/// use cellauto_lib::RotatingBuffer;
///
/// let mut buffer = RotatingBuffer::<u8, 2>::from_fn(|i| i as u8);
/// assert_eq!((*buffer.get::<0>(), *buffer.get::<1>()), (0, 1));
/// buffer.timestep();
/// assert_eq!((*buffer.get::<0>(), *buffer.get::<1>()), (1, 0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotatingBuffer<T, const N: usize> {
    /// The slots.
    slots: [T; N],

    /// Physical index of the current slot. Always less than `N`.
    current: usize,
}

impl<T: Clone, const N: usize> RotatingBuffer<T, N> {
    /// Creates a buffer whose slots are all copies of `value`.
    pub fn new(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }

    /// Creates a buffer whose slots are all copies of the value built by
    /// `f`, or returns the error of `f`.
    pub fn try_new<E, F: FnOnce() -> Result<T, E>>(f: F) -> Result<Self, E> {
        Ok(Self::new(f()?))
    }
}

impl<T, const N: usize> RotatingBuffer<T, N> {
    /// Creates a buffer by calling `f` with the physical index of each slot.
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        let () = Offset::<0, 0, N>::IN_RANGE;
        RotatingBuffer {
            slots: array::from_fn(f),
            current: 0,
        }
    }

    /// Number of slots.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `false`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Physical index of the current slot.
    #[inline]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Physical index of the slot at offset `k` from the current one.
    #[inline]
    const fn physical(&self, k: usize) -> usize {
        (self.current + k) % N
    }

    /// The slot at offset `K` from the current one.
    #[inline]
    pub fn get<const K: usize>(&self) -> &T {
        let () = Offset::<K, K, N>::IN_RANGE;
        &self.slots[self.physical(K)]
    }

    /// The slot at offset `K` from the current one, mutable.
    #[inline]
    pub fn get_mut<const K: usize>(&mut self) -> &mut T {
        let () = Offset::<K, K, N>::IN_RANGE;
        let index = self.physical(K);
        &mut self.slots[index]
    }

    /// The slot at offset `K` for reading and the slot at offset `M`
    /// for writing, at the same time.
    ///
    /// `K` and `M` must be different.
    #[inline]
    pub fn get_pair_mut<const K: usize, const M: usize>(&mut self) -> (&T, &mut T) {
        let () = Offset::<K, M, N>::DISTINCT;
        let read = self.physical(K);
        let write = self.physical(M);
        if read < write {
            let (head, tail) = self.slots.split_at_mut(write);
            (&head[read], &mut tail[0])
        } else {
            let (head, tail) = self.slots.split_at_mut(read);
            (&tail[0], &mut head[write])
        }
    }

    /// Moves the cursor one slot forward.
    ///
    /// Nothing is constructed, cleared or moved: the slot that was at
    /// offset `1` becomes current with whatever it contains.
    #[inline]
    pub fn timestep(&mut self) {
        self.current = self.physical(1);
    }

    /// Iterates over the slots starting from the current one,
    /// in order of increasing offset.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..N).map(move |k| &self.slots[self.physical(k)])
    }

    /// Iterates mutably over all slots, in physical order.
    ///
    /// Useful for operations that apply to every slot alike,
    /// such as resizing.
    pub fn slots_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut()
    }
}
