//! Bounded traversal over the sub-user edge set. Trees are assembled from
//! one flat query per group; depth is enforced by the traversal itself,
//! never by recursive queries.

use crate::db::model::SubUser;
use crate::db::operations::models::FlatSubUser;
use crate::db::operations::models::MemberNode;
use crate::db::types::RoleType;
use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct NodeInfo {
    pub name: String,
    pub email: String,
}

fn info_for<'a>(users: &'a HashMap<Uuid, NodeInfo>, user_uuid: &Uuid) -> (&'a str, &'a str) {
    users
        .get(user_uuid)
        .map(|i| (i.name.as_str(), i.email.as_str()))
        .unwrap_or(("", ""))
}

/// Breadth-first expansion of the delegation tree rooted at `root_uuid`.
/// Nodes deeper than `max_depth` levels below the root are cut off.
pub fn build_subtree(
    root_uuid: Uuid,
    root_role: RoleType,
    root_level: i32,
    edges: &[SubUser],
    users: &HashMap<Uuid, NodeInfo>,
    max_depth: u32,
) -> MemberNode {
    let mut children: HashMap<Uuid, Vec<&SubUser>> = HashMap::new();
    for edge in edges {
        if edge.parent_uuid != edge.user_uuid {
            children.entry(edge.parent_uuid).or_default().push(edge);
        }
    }

    let (name, email) = info_for(users, &root_uuid);
    let mut nodes: HashMap<Uuid, MemberNode> = HashMap::new();
    nodes.insert(
        root_uuid,
        MemberNode {
            user_uuid: root_uuid,
            name: name.to_owned(),
            email: email.to_owned(),
            role: root_role,
            level: root_level,
            sub_users: Vec::new(),
        },
    );

    let mut visited: HashSet<Uuid> = HashSet::new();
    visited.insert(root_uuid);
    let mut parents: Vec<(Uuid, Uuid)> = Vec::new();
    let mut queue: VecDeque<(Uuid, u32)> = VecDeque::new();
    queue.push_back((root_uuid, 0));

    while let Some((user_uuid, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }
        for edge in children.get(&user_uuid).map(|c| c.as_slice()).unwrap_or(&[]) {
            if !visited.insert(edge.user_uuid) {
                continue;
            }
            let (name, email) = info_for(users, &edge.user_uuid);
            nodes.insert(
                edge.user_uuid,
                MemberNode {
                    user_uuid: edge.user_uuid,
                    name: name.to_owned(),
                    email: email.to_owned(),
                    role: edge.role,
                    level: edge.level,
                    sub_users: Vec::new(),
                },
            );
            parents.push((edge.user_uuid, user_uuid));
            queue.push_back((edge.user_uuid, depth + 1));
        }
    }

    // Deepest nodes first, so every child is complete before it moves
    // into its parent.
    for (child, parent) in parents.into_iter().rev() {
        if let Some(node) = nodes.remove(&child) {
            if let Some(parent_node) = nodes.get_mut(&parent) {
                parent_node.sub_users.insert(0, node);
            }
        }
    }

    nodes.remove(&root_uuid).unwrap_or_else(|| MemberNode {
        user_uuid: root_uuid,
        name: String::new(),
        email: String::new(),
        role: root_role,
        level: root_level,
        sub_users: Vec::new(),
    })
}

/// Flattens the subtree rooted at `root_uuid` (the root included) in
/// breadth-first order, bounded by `max_depth`.
pub fn flatten_subtree(
    root_uuid: Uuid,
    root_parent_uuid: Uuid,
    root_level: i32,
    edges: &[SubUser],
    users: &HashMap<Uuid, NodeInfo>,
    max_depth: u32,
) -> Vec<FlatSubUser> {
    let mut children: HashMap<Uuid, Vec<&SubUser>> = HashMap::new();
    for edge in edges {
        if edge.parent_uuid != edge.user_uuid {
            children.entry(edge.parent_uuid).or_default().push(edge);
        }
    }

    let (name, email) = info_for(users, &root_uuid);
    let mut flat = vec![FlatSubUser {
        user_uuid: root_uuid,
        name: name.to_owned(),
        email: email.to_owned(),
        parent_uuid: root_parent_uuid,
        level: root_level,
    }];

    let mut visited: HashSet<Uuid> = HashSet::new();
    visited.insert(root_uuid);
    let mut queue: VecDeque<(Uuid, u32)> = VecDeque::new();
    queue.push_back((root_uuid, 0));

    while let Some((user_uuid, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }
        for edge in children.get(&user_uuid).map(|c| c.as_slice()).unwrap_or(&[]) {
            if !visited.insert(edge.user_uuid) {
                continue;
            }
            let (name, email) = info_for(users, &edge.user_uuid);
            flat.push(FlatSubUser {
                user_uuid: edge.user_uuid,
                name: name.to_owned(),
                email: email.to_owned(),
                parent_uuid: edge.parent_uuid,
                level: edge.level,
            });
            queue.push_back((edge.user_uuid, depth + 1));
        }
    }

    flat
}
