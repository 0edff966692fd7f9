pub fn consume_while<'s>(input: &mut &'s str, predicate: impl FnMut(&char) -> bool) -> &'s str {
    let len = input.chars().take_while(predicate).count();
    if len == 0 {
        return "";
    }
    let result = &input[..len];
    *input = &input[len..];
    result
}

/// Caps the text rendered in error messages, long inputs end with `...`.
#[macro_export]
macro_rules! truncate_long {
    ($text:expr) => {
        format_args!(
            "{}{}",
            &$text[..::std::cmp::min($text.len(), 497)],
            if $text.len() > 497 { "..." } else { "" },
        )
    };
}
