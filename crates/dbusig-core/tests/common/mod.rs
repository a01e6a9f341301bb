//! Test-only decomposition of signatures into complete types.

#![allow(dead_code)]

use dbusig_core::{TYPE_CODES, VARIANT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Code(char),
    Array(Box<Node>),
    Struct(Vec<Node>),
    DictEntry(char, Box<Node>),
}

impl Node {
    /// Every primitive code in the node, dict keys included.
    pub fn codes(&self) -> usize {
        match self {
            Node::Code(_) => 1,
            Node::Array(child) => child.codes(),
            Node::Struct(members) => members.iter().map(Node::codes).sum(),
            Node::DictEntry(_, value) => 1 + value.codes(),
        }
    }

    pub fn dict_entries(&self) -> usize {
        match self {
            Node::Code(_) => 0,
            Node::Array(child) => child.dict_entries(),
            Node::Struct(members) => members.iter().map(Node::dict_entries).sum(),
            Node::DictEntry(_, value) => 1 + value.dict_entries(),
        }
    }

    pub fn visit(&self, f: &mut impl FnMut(&Node)) {
        f(self);
        match self {
            Node::Code(_) => {}
            Node::Array(child) | Node::DictEntry(_, child) => child.visit(f),
            Node::Struct(members) => members.iter().for_each(|member| member.visit(f)),
        }
    }
}

/// Split a signature into its complete types, rejecting anything malformed.
pub fn parse_signature(signature: &str) -> Result<Vec<Node>, String> {
    let chars: Vec<char> = signature.chars().collect();
    let mut pos = 0;
    let mut nodes = Vec::new();
    while pos < chars.len() {
        let (node, next) = parse_complete(&chars, pos)?;
        nodes.push(node);
        pos = next;
    }
    Ok(nodes)
}

fn parse_complete(chars: &[char], pos: usize) -> Result<(Node, usize), String> {
    match chars.get(pos) {
        None => Err(format!("unexpected end at {pos}")),
        Some('a') if chars.get(pos + 1) == Some(&'{') => {
            let key = *chars
                .get(pos + 2)
                .ok_or_else(|| format!("missing dict key at {}", pos + 2))?;
            if !TYPE_CODES.contains(&key) || key == VARIANT {
                return Err(format!("invalid dict key '{key}' at {}", pos + 2));
            }
            let (value, next) = parse_complete(chars, pos + 3)?;
            if chars.get(next) != Some(&'}') {
                return Err(format!("unterminated dict entry at {next}"));
            }
            Ok((Node::DictEntry(key, Box::new(value)), next + 1))
        }
        Some('a') => {
            let (child, next) = parse_complete(chars, pos + 1)?;
            Ok((Node::Array(Box::new(child)), next))
        }
        Some('(') => {
            let mut members = Vec::new();
            let mut next = pos + 1;
            while chars.get(next) != Some(&')') {
                let (member, after) = parse_complete(chars, next)?;
                members.push(member);
                next = after;
            }
            if members.is_empty() {
                return Err(format!("empty struct at {pos}"));
            }
            Ok((Node::Struct(members), next + 1))
        }
        Some(code) if TYPE_CODES.contains(code) => Ok((Node::Code(*code), pos + 1)),
        Some(other) => Err(format!("unexpected symbol '{other}' at {pos}")),
    }
}
