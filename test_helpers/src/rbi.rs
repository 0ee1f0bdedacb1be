//! Helpers for inspecting rendered RBI text.

/// Returns the block opened by the line `opener`, up to and including its
/// closing `end`.
#[must_use]
pub fn block(text: &str, opener: &str) -> Option<String> {
    let mut lines = text
        .split_inclusive('\n')
        .skip_while(|line| line.trim_end() != opener);
    let first = lines.next()?;
    let mut collected = String::from(first);
    for line in lines {
        collected.push_str(line);
        if line == "end\n" {
            return Some(collected);
        }
    }
    None
}

/// Method names declared by `def` lines, in order. Class methods keep their
/// `self.` prefix.
#[must_use]
pub fn defs(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim_start();
            ["private ", "protected "]
                .iter()
                .find_map(|keyword| trimmed.strip_prefix(keyword))
                .unwrap_or(trimmed)
                .strip_prefix("def ")
        })
        .map(|signature| {
            signature
                .split(['(', ';'])
                .next()
                .unwrap_or(signature)
                .to_owned()
        })
        .collect()
}

/// The `class` and `module` opener lines, in order.
#[must_use]
pub fn openers(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|line| line.starts_with("class ") || line.starts_with("module "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = concat!(
        "# typed: strong\n\n",
        "class A\n  def x; end\n  def self.y(a); end\nend\n\n",
        "module B\n  private def z; end\nend\n",
    );

    #[test]
    fn extracts_blocks_and_defs() {
        let class_block = block(SAMPLE, "class A").expect("class A is rendered");
        assert_eq!(defs(&class_block), vec!["x", "self.y"]);
        assert_eq!(defs(SAMPLE), vec!["x", "self.y", "z"]);
        assert_eq!(openers(SAMPLE), vec!["class A", "module B"]);
        assert_eq!(block(SAMPLE, "class C"), None);
    }
}
