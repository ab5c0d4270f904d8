/// Uppercases the first character of `s`, leaving the rest untouched.
///
/// Characters whose uppercase form spans several code points (`ß` → `SS`)
/// are expanded. An empty input yields an empty string.
pub fn capitalize(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
