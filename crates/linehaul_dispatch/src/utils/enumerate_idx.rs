/// `enumerate` variant that yields typed indices instead of raw `usize`.
pub trait EnumerateIdx: Iterator + Sized {
    fn enumerate_idx<Idx: From<usize>>(self) -> impl Iterator<Item = (Idx, Self::Item)> {
        self.enumerate().map(|(i, item)| (Idx::from(i), item))
    }
}

impl<I: Iterator> EnumerateIdx for I {}
