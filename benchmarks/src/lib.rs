//! Sample Lox programs shared by the scanner benchmarks.

/// Simple arithmetic expression
pub const SIMPLE_EXPR: &str = "1 + 2 * 3";

/// Operators that need one character of lookahead
pub const OPERATORS: &str = "a != b == c <= d >= e < f > g = !h";

/// Function declaration and call
pub const FUNCTION: &str = r#"
fun add(a, b) {
  return a + b;
}
print add(1, 2);
"#;

/// Class with methods, comments and strings
pub const CLASS: &str = r#"
// A breakfast item
class Breakfast {
  init(meat, bread) {
    this.meat = meat;
    this.bread = bread;
  }

  serve(who) {
    print "Enjoy your " + this.meat + " and " +
        this.bread + ", " + who + ".";
  }
}

var baconAndToast = Breakfast("bacon", "toast");
baconAndToast.serve("Dear Reader");
"#;

/// Loop with numeric literals
pub const LOOP: &str = r#"
var total = 0;
for (var i = 0; i < 100; i = i + 1) {
  if (i / 2 >= 12.5 and i != 42) total = total + i * 0.5;
}
print total;
"#;

/// Source that exercises error recovery
pub const ERRORS: &str = r#"
var ok = 1;
var bad = @ # $;
print "unterminated
"#;

/// Every sample with its benchmark name
pub const SAMPLES: &[(&str, &str)] = &[
    ("simple", SIMPLE_EXPR),
    ("operators", OPERATORS),
    ("function", FUNCTION),
    ("class", CLASS),
    ("loop", LOOP),
];

/// `source` repeated `times` times, separated by newlines
pub fn repeated(source: &str, times: usize) -> String {
    let mut out = String::with_capacity((source.len() + 1) * times);
    for _ in 0..times {
        out.push_str(source);
        out.push('\n');
    }
    out
}
