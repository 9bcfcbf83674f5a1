use crate::partitioner::{
    error::GenerationError,
    source::RandomSource,
    types::{GroupSize, Partition},
};

/// Randomly deal `present` identifiers into `ceil(n / size)` groups.
///
/// The shuffled sequence is dealt round-robin, so realized group sizes are
/// the floor or ceiling of `n / groups` rather than exactly `size`.
pub fn partition<S: AsRef<str>>(
    present: &[S],
    size: GroupSize,
    source: &mut dyn RandomSource,
) -> Result<Partition, GenerationError> {
    let available = present.len();

    if available == 0 {
        return Err(GenerationError::EmptySelection);
    }

    if size.get() > available {
        return Err(GenerationError::SizeExceedsAvailable {
            requested: size.get(),
            available,
        });
    }

    // 1. Shuffle a private copy
    let mut shuffled: Vec<String> = present.iter().map(|id| id.as_ref().to_owned()).collect();
    source.shuffle(&mut shuffled);

    // 2. Number of groups
    let group_count = available.div_ceil(size.get());

    // 3. Deal round-robin
    let mut groups: Vec<Vec<String>> = (0..group_count)
        .map(|_| Vec::with_capacity(size.get()))
        .collect();

    for (i, id) in shuffled.into_iter().enumerate() {
        groups[i % group_count].push(id);
    }

    tracing::debug!(
        available,
        requested = size.get(),
        groups = group_count,
        "partitioned present students"
    );

    Ok(Partition::from_groups(groups))
}
