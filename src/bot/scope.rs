//! Channel scoping for normal commands.

/// Whether a message in `message_channel` may run normal commands.
///
/// Nothing is in scope until a channel has been bound. The rebinding command
/// bypasses this check entirely; see [`crate::bot::checks::admit`].
pub fn is_in_scope(message_channel: u64, configured_channel: Option<u64>) -> bool {
    configured_channel == Some(message_channel)
}
