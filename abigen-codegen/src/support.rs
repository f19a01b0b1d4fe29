//! Runtime support declarations shared by every generated contract file.

use crate::tree::{DeclarationTree, Node};

/// Builds the support declaration tree.
#[must_use]
pub fn support_tree() -> DeclarationTree {
    let mut tree = DeclarationTree::new();

    tree.push(Node::block(
        "export interface TableRowsResult<T>",
        vec![
            Node::line("rows: Array<T>;"),
            Node::line("more: boolean;"),
            Node::line("next_key: string;"),
        ],
    ));
    tree.push(Node::blank());

    tree.push(Node::block(
        "export enum TransactionStatus",
        vec![Node::line("executed = 'executed',")],
    ));
    tree.push(Node::blank());

    let processed = Node::block_with_suffix(
        "processed:",
        vec![
            Node::line("id: string;"),
            Node::line("block_num: number;"),
            Node::line("block_time: Date;"),
            Node::line(
                "receipt: { status: TransactionStatus; cpu_usage_us: number; net_usage_words: number };",
            ),
            Node::line("elapsed: number;"),
            Node::line("net_usage: number;"),
            Node::line("scheduled: boolean;"),
            Node::line("action_traces: any[];"),
            Node::line("failed_dtrx_trace: any;"),
        ],
        ";",
    );
    tree.push(Node::block(
        "export interface TransactionResponse",
        vec![Node::line("transaction_id: string;"), processed],
    ));

    tree
}

/// Renders the support declarations.
#[must_use]
pub fn support_declarations(indent: &str) -> String {
    support_tree().flatten(indent)
}
