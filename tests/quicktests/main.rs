use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// a relation in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<X, Y> {
    /// Insert the pair into the relation
    Insert(X, Y),
    /// Delete the exact pair
    Delete(X, Y),
    /// Delete every pair with this X
    DeleteViaX(X),
    /// Delete every pair with this Y
    DeleteViaY(Y),
}

impl<X, Y> Arbitrary for Op<X, Y>
where
    X: Arbitrary,
    Y: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2, 3]).unwrap() {
            0 => Op::Insert(X::arbitrary(g), Y::arbitrary(g)),
            1 => Op::Delete(X::arbitrary(g), Y::arbitrary(g)),
            2 => Op::DeleteViaX(X::arbitrary(g)),
            3 => Op::DeleteViaY(Y::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
