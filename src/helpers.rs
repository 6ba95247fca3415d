/// Renders elapsed seconds as `m:ss`, e.g. `125` becomes `2:05`.
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
