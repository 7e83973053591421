use crate::prelude::*;
use crate::problem_builder::ProblemBuilder;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing {section} count")]
    MissingCount { section: &'static str },
    #[error("line {line}: expected a {section} count, found '{text}'")]
    BadCount {
        section: &'static str,
        line: usize,
        text: String,
    },
    #[error("expected {expected} {section} lines, found {found}")]
    MissingLine {
        section: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
}

/// Read a problem from `path`, or from stdin if `path` is `-`.
pub fn load(path: &Path) -> Result<Problem, InputError> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        text
    } else {
        std::fs::read_to_string(path)?
    };
    parse(&text)
}

pub fn parse(text: &str) -> Result<Problem, InputError> {
    let mut builder = ProblemBuilder::default();
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let queries = count(&mut lines, "query")?;
    for (number, line) in section(&mut lines, "query", queries)? {
        let mut parser = Parser::new(&mut builder, number, line);
        parser.literal()?;
        parser.finish()?;
        builder.query();
    }

    let sentences = count(&mut lines, "sentence")?;
    for (number, line) in section(&mut lines, "sentence", sentences)? {
        let mut parser = Parser::new(&mut builder, number, line);
        parser.literal()?;
        while parser.eat('|') {
            parser.literal()?;
        }
        parser.finish()?;
        builder.clause();
    }

    if let Some((line, _)) = lines.next() {
        return Err(InputError::Syntax {
            line,
            message: "unexpected trailing input".into(),
        });
    }
    Ok(builder.finish())
}

fn count<'t, I: Iterator<Item = (usize, &'t str)>>(
    lines: &mut I,
    section: &'static str,
) -> Result<usize, InputError> {
    let (line, text) = lines
        .next()
        .ok_or(InputError::MissingCount { section })?;
    text.trim().parse().map_err(|_| InputError::BadCount {
        section,
        line,
        text: text.trim().into(),
    })
}

fn section<'t, I: Iterator<Item = (usize, &'t str)>>(
    lines: &mut I,
    section: &'static str,
    expected: usize,
) -> Result<Vec<(usize, &'t str)>, InputError> {
    let taken: Vec<_> = lines.take(expected).collect();
    if taken.len() < expected {
        return Err(InputError::MissingLine {
            section,
            expected,
            found: taken.len(),
        });
    }
    Ok(taken)
}

/// Recursive-descent reader for a single line of literals.
struct Parser<'b> {
    builder: &'b mut ProblemBuilder,
    line: usize,
    chars: Vec<char>,
    position: usize,
}

impl<'b> Parser<'b> {
    fn new(builder: &'b mut ProblemBuilder, line: usize, text: &str) -> Self {
        let chars = text.chars().filter(|c| !c.is_whitespace()).collect();
        let position = 0;
        Self {
            builder,
            line,
            chars,
            position,
        }
    }

    fn literal(&mut self) -> Result<(), InputError> {
        let polarity = !self.eat('~');
        let name = self.name()?;
        let args = self.args()?;
        self.builder.literal(polarity, &name, args);
        Ok(())
    }

    fn args(&mut self) -> Result<Vec<Term>, InputError> {
        self.expect('(')?;
        let mut args = vec![];
        if self.eat(')') {
            return Ok(args);
        }
        loop {
            args.push(self.term()?);
            if self.eat(')') {
                return Ok(args);
            }
            self.expect(',')?;
        }
    }

    fn term(&mut self) -> Result<Term, InputError> {
        let name = self.name()?;
        if self.peek() == Some('(') {
            let args = self.args()?;
            return Ok(self.builder.function(&name, args));
        }
        if name.starts_with(|c: char| c.is_uppercase()) {
            Ok(self.builder.constant(&name))
        } else {
            Ok(self.builder.variable(&name))
        }
    }

    fn name(&mut self) -> Result<String, InputError> {
        match self.peek() {
            Some(c) if c.is_alphabetic() => {}
            _ => return Err(self.error("expected a name")),
        }
        let start = self.position;
        while let Some(c) = self.peek() {
            if !(c.is_alphanumeric() || c == '_') {
                break;
            }
            self.position += 1;
        }
        Ok(self.chars[start..self.position].iter().collect())
    }

    fn finish(&self) -> Result<(), InputError> {
        if self.position == self.chars.len() {
            Ok(())
        } else {
            Err(self.error("unexpected character"))
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), InputError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.error(&format!("expected '{}'", expected)))
        }
    }

    fn error(&self, message: &str) -> InputError {
        let found = match self.peek() {
            Some(c) => format!("'{}'", c),
            None => "end of line".into(),
        };
        InputError::Syntax {
            line: self.line,
            message: format!("{}, found {}", message, found),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(problem: &Problem) -> (Vec<String>, Vec<String>) {
        let symbols = problem.signature();
        let queries = problem
            .queries()
            .iter()
            .map(|query| query.display(symbols).to_string())
            .collect();
        let clauses = problem
            .clauses()
            .iter()
            .map(|clause| clause.display(symbols).to_string())
            .collect();
        (queries, clauses)
    }

    #[test]
    fn reads_queries_and_sentences() {
        let text = "2\n\
                    Likes(Jane, Bill)\n\
                    ~Evil(John)\n\
                    3\n\
                    ~King(x) | ~Greedy(x) | Evil(x)\n\
                    King(John)\n\
                    Greedy ( John )\n";
        let problem = parse(text).unwrap();
        let (queries, clauses) = show(&problem);
        assert_eq!(queries, vec!["Likes(Jane,Bill)", "~Evil(John)"]);
        assert_eq!(
            clauses,
            vec![
                "~Greedy(x0) | ~King(x0) | Evil(x0)",
                "King(John)",
                "Greedy(John)"
            ]
        );
    }

    #[test]
    fn lowercase_arguments_are_variables() {
        let problem = parse("1\nP(A)\n1\nP(xy) | Q(Xy, xy)\n").unwrap();
        let clause = &problem.clauses()[0];
        let positive = clause.positive();
        assert!(positive[0].args()[0].is_variable());
        assert!(!positive[1].args()[0].is_variable());
        assert_eq!(positive[0].args()[0], positive[1].args()[1]);
    }

    #[test]
    fn nested_function_terms() {
        let problem = parse("1\nP(f(A))\n1\n~P(x)|P(g(x, B))\n").unwrap();
        let (queries, clauses) = show(&problem);
        assert_eq!(queries, vec!["P(f(A))"]);
        assert_eq!(clauses, vec!["~P(x0) | P(g(x0,B))"]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let problem = parse("\n1\n\nP(A)\n\n1\nP(A)\n\n").unwrap();
        assert_eq!(problem.num_queries(), 1);
        assert_eq!(problem.num_clauses(), 1);
    }

    #[test]
    fn bad_count() {
        match parse("one\nP(A)\n") {
            Err(InputError::BadCount { line: 1, .. }) => {}
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_sentences() {
        match parse("1\nP(A)\n2\nP(A)\n") {
            Err(InputError::MissingLine {
                section: "sentence",
                expected: 2,
                found: 1,
            }) => {}
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
        assert!(matches!(
            parse("1\nP(A)\n"),
            Err(InputError::MissingCount { section: "sentence" })
        ));
    }

    #[test]
    fn unbalanced_parentheses() {
        for text in &["1\nP(A\n0\n", "1\nP(A))\n0\n", "1\nP A\n0\n"] {
            match parse(text) {
                Err(InputError::Syntax { line: 2, .. }) => {}
                other => panic!("unexpected {:?}", other.map(|_| ())),
            }
        }
    }

    #[test]
    fn dangling_disjunction() {
        let error = parse("0\n1\nP(A) |\n").map(|_| ()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "line 3: expected a name, found end of line"
        );
    }
}
