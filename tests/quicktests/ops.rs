use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a binary tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op {
    /// Insert a leaf holding the value below the root
    Insert(i8),
    /// Look the value up level by level
    Bfs(i8),
    /// Look the value up by ordered descent
    Dfs(i8),
}

impl Arbitrary for Op {
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(i8::arbitrary(g)),
            1 => Op::Bfs(i8::arbitrary(g)),
            2 => Op::Dfs(i8::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
