//! Build a tree of mappings and sequences from indentation-delimited text.
//!
//! This is deliberately not a YAML parser. Indentation is the only nesting
//! signal: a key with nothing after its colon opens a block, a `- ` line
//! appends to the sequence under the most recent key, and anything else is
//! skipped. Two sibling keys written at different indents will mis-nest;
//! files in the wild rely on exactly this behaviour so it is preserved.

use tracing::debug;

use crate::language::{coerce, ParsingError, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(Value),
    Mapping(Mapping),
    Sequence(Vec<Node>),
}

impl Node {
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Node::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// The scalar members of a sequence as text. A lone scalar is treated
    /// as a sequence of one; an empty block yields nothing.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Node::Sequence(items) => items
                .iter()
                .filter_map(Node::as_scalar)
                .map(Value::as_text)
                .collect(),
            Node::Scalar(value) => vec![value.as_text()],
            Node::Mapping(_) => Vec::new(),
        }
    }
}

/// Keys in insertion order. Keys are unique; inserting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    entries: Vec<(String, Node)>,
}

impl Mapping {
    pub fn new() -> Mapping {
        Mapping {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, key: String, node: Node) {
        match self
            .entries
            .iter_mut()
            .find(|(k, _)| *k == key)
        {
            Some((_, existing)) => *existing = node,
            None => self
                .entries
                .push((key, node)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .is_empty()
    }

    fn last_key(&self) -> Option<&str> {
        self.entries
            .last()
            .map(|(k, _)| k.as_str())
    }

    fn pop(&mut self) -> Option<(String, Node)> {
        self.entries
            .pop()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Container {
    Mapping(Mapping),
    Sequence(Vec<Node>),
}

impl Container {
    fn into_node(self) -> Node {
        match self {
            Container::Mapping(mapping) => Node::Mapping(mapping),
            Container::Sequence(items) => Node::Sequence(items),
        }
    }
}

/// An open container, the column it was opened at, and the key it will be
/// stored under in its parent once closed. Only the sentinel root frame
/// has no key.
#[derive(Debug, Clone, PartialEq)]
struct Frame {
    indent: isize,
    key: Option<String>,
    container: Container,
}

#[derive(Debug)]
struct Stack {
    frames: Vec<Frame>,
}

impl Stack {
    fn new() -> Stack {
        Stack {
            frames: vec![Frame {
                indent: -2,
                key: None,
                container: Container::Mapping(Mapping::new()),
            }],
        }
    }

    fn current(&mut self) -> &mut Frame {
        // the root frame is never popped
        let last = self
            .frames
            .len()
            - 1;
        &mut self.frames[last]
    }

    fn push(&mut self, frame: Frame) {
        self.frames
            .push(frame);
    }

    /// Close every frame opened at or beyond the given column, storing each
    /// into its parent.
    fn unwind(&mut self, indent: isize) {
        while self
            .frames
            .len()
            > 1
            && self
                .current()
                .indent
                >= indent
        {
            self.close();
        }
    }

    fn close(&mut self) {
        let frame = match self
            .frames
            .pop()
        {
            Some(frame) => frame,
            None => return,
        };

        let key = match frame.key {
            Some(key) => key,
            None => return,
        };

        let node = frame
            .container
            .into_node();

        match &mut self
            .current()
            .container
        {
            Container::Mapping(mapping) => mapping.insert(key, node),
            Container::Sequence(items) => items.push(node),
        }
    }

    fn finish(mut self) -> Mapping {
        self.unwind(-1);
        match self
            .frames
            .pop()
        {
            Some(Frame {
                container: Container::Mapping(mapping),
                ..
            }) => mapping,
            _ => Mapping::new(),
        }
    }
}

/// The column of the first non-whitespace character.
fn indentation(line: &str) -> isize {
    (line.len()
        - line
            .trim_start()
            .len()) as isize
}

fn is_skipped(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

fn is_sequence_item(trimmed: &str) -> bool {
    trimmed.starts_with("- ") || trimmed == "-"
}

/// Turn text into a tree rooted at a Mapping. Fails only when there is no
/// content at all once blank and comment lines are discarded.
pub fn build(content: &str) -> Result<Mapping, ParsingError> {
    let lines: Vec<&str> = content
        .lines()
        .filter(|line| !is_skipped(line))
        .collect();

    if lines.is_empty() {
        return Err(ParsingError::Empty);
    }

    let mut stack = Stack::new();

    for (i, line) in lines
        .iter()
        .enumerate()
    {
        let indent = indentation(line);
        let trimmed = line.trim();

        if is_sequence_item(trimmed) {
            let text = trimmed[1..].trim();
            sequence_item(&mut stack, indent, coerce(text), i);
        } else if let Some((key, remainder)) = trimmed.split_once(':') {
            key_line(&mut stack, indent, key.trim(), remainder.trim(), i);
        } else {
            debug!("Skipping line {}: {:?}", i, trimmed);
        }
    }

    Ok(stack.finish())
}

/// Where a list item goes once the frames deeper than it are closed.
enum Attach {
    Extend,
    TakeOver,
    Convert,
    Nowhere,
}

fn sequence_item(stack: &mut Stack, indent: isize, value: Value, i: usize) {
    // continuing the list we are already in
    {
        let frame = stack.current();
        if frame.indent == indent {
            if let Container::Sequence(items) = &mut frame.container {
                items.push(Node::Scalar(value));
                return;
            }
        }
    }

    stack.unwind(indent);

    let frame = stack.current();
    let attach = match &frame.container {
        // items indented further than the list's own column
        Container::Sequence(_) => Attach::Extend,
        // list written at the same column as its key
        Container::Mapping(mapping) if mapping
            .last_key()
            .is_some() =>
        {
            Attach::TakeOver
        }
        // list indented under a key that opened an empty block
        Container::Mapping(_) if frame
            .key
            .is_some() =>
        {
            Attach::Convert
        }
        Container::Mapping(_) => Attach::Nowhere,
    };

    match attach {
        Attach::Extend => {
            if let Container::Sequence(items) = &mut frame.container {
                items.push(Node::Scalar(value));
            }
        }
        Attach::TakeOver => {
            // the slot belonging to the most recent key becomes the list,
            // keeping what it already had if it was one.
            let entry = match &mut frame.container {
                Container::Mapping(mapping) => mapping.pop(),
                Container::Sequence(_) => None,
            };
            if let Some((key, previous)) = entry {
                let mut items = match previous {
                    Node::Sequence(items) => items,
                    _ => Vec::new(),
                };
                items.push(Node::Scalar(value));
                stack.push(Frame {
                    indent,
                    key: Some(key),
                    container: Container::Sequence(items),
                });
            }
        }
        Attach::Convert => {
            frame.container = Container::Sequence(vec![Node::Scalar(value)]);
        }
        Attach::Nowhere => {
            debug!("Skipping line {}: list item with no key to attach to", i);
        }
    }
}

fn key_line(stack: &mut Stack, indent: isize, key: &str, remainder: &str, i: usize) {
    stack.unwind(indent);

    let frame = stack.current();
    let mapping = match &mut frame.container {
        Container::Mapping(mapping) => mapping,
        Container::Sequence(_) => {
            debug!("Skipping line {}: key '{}' inside a list", i, key);
            return;
        }
    };

    if remainder.is_empty() {
        // a nested block follows
        stack.push(Frame {
            indent,
            key: Some(key.to_string()),
            container: Container::Mapping(Mapping::new()),
        });
    } else {
        mapping.insert(key.to_string(), Node::Scalar(coerce(remainder)));
    }
}
