//! Declaration tree and the flattening pass that renders it as text.

/// A node of the declaration tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single already-rendered line.
    Line(String),
    /// A scope opened by a header line.
    Block {
        /// Header written before the opening brace.
        header: String,
        /// Nested nodes, one level deeper.
        children: Vec<Node>,
        /// Text written directly after the closing brace (e.g. `;`).
        suffix: String,
    },
}

impl Node {
    /// Creates a line node.
    #[must_use]
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }

    /// Creates an empty line.
    #[must_use]
    pub fn blank() -> Self {
        Self::Line(String::new())
    }

    /// Creates a block closed by a bare `}`.
    #[must_use]
    pub fn block(header: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Block {
            header: header.into(),
            children,
            suffix: String::new(),
        }
    }

    /// Creates a block whose closing brace is followed by `suffix`.
    #[must_use]
    pub fn block_with_suffix(
        header: impl Into<String>,
        children: Vec<Node>,
        suffix: impl Into<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            children,
            suffix: suffix.into(),
        }
    }
}

/// Ordered top-level sequence of declaration nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationTree {
    nodes: Vec<Node>,
}

impl DeclarationTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node.
    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Appends a line.
    pub fn push_line(&mut self, text: impl Into<String>) {
        self.nodes.push(Node::line(text));
    }

    /// Renders the tree depth-first, one `indent` unit per nesting level.
    #[must_use]
    pub fn flatten(&self, indent: &str) -> String {
        let mut writer = Writer {
            out: String::new(),
            indent,
            depth: 0,
        };
        writer.write_nodes(&self.nodes);
        writer.out
    }
}

impl Extend<Node> for DeclarationTree {
    fn extend<I: IntoIterator<Item = Node>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

impl From<Vec<Node>> for DeclarationTree {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

struct Writer<'a> {
    out: String,
    indent: &'a str,
    depth: usize,
}

impl Writer<'_> {
    fn write_line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(self.indent);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn write_nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            match node {
                Node::Line(text) => self.write_line(text),
                Node::Block {
                    header,
                    children,
                    suffix,
                } => {
                    self.write_line(&format!("{header} {{"));
                    self.depth += 1;
                    self.write_nodes(children);
                    self.depth -= 1;
                    self.write_line(&format!("}}{suffix}"));
                }
            }
        }
    }
}
