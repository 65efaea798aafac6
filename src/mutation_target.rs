#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum MutationTarget {
  Comment(u64),
  Create,
}
