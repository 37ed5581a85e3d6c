//! Macros for ergonomic configuration construction.

/// Build a [`Config`](crate::core::Config) from a declarative table.
///
/// States appear in the configuration in the order they are written. Any
/// expression convertible into `String` works as a name.
///
/// # Example
///
/// ```
/// use undoable_fsm::fsm_config;
///
/// let config = fsm_config! {
///     initial: "off",
///     states: {
///         "off" => { "switchOn" => "on" },
///         "on" => { "switchOff" => "off", "break" => "broken" },
///         "broken" => {},
///     }
/// };
///
/// assert_eq!(config.initial(), "off");
/// assert_eq!(config.len(), 3);
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => {
                    $($event:expr => $target:expr),* $(,)?
                }
            ),* $(,)?
        } $(,)?
    ) => {{
        let config = $crate::core::Config::new($initial);
        $(
            let config = config.with_state(
                $state,
                $crate::core::StateDef::new()$(.on($event, $target))*,
            );
        )*
        config
    }};
}
