//! The token library: tree ownership, resolution, and change notification.
//!
//! This module handles:
//! - `load` and `get` tree access
//! - `resolve_value` and `resolve` read paths
//! - `flatmap` and `mutate` whole-tree operations (see `traverse`)
//! - The subscription registry

mod traverse;
mod types;

pub use types::{Mutate, Mutation, SubscriberId};

use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::path;
use crate::resolver;
use crate::resolver::AliasPatterns;
use crate::tree::ops::{get_path, pick};
use crate::tree::shape::{META_KEYS, NodeShape, TOKEN_KEYS, classify};
use crate::validate::Validators;

type SubscriberFn = Box<dyn FnMut(Option<&[Mutation]>, &Value)>;

struct Subscriber {
	id: SubscriberId,
	callback: SubscriberFn,
}

/// A design token tree plus the machinery to resolve and edit it.
///
/// The tree is a single mutable structure rooted at one group and owned by
/// the library; only [`Library::load`] replaces it wholesale and only
/// [`Library::mutate`] edits it in place. All operations are synchronous.
pub struct Library {
	tree: Value,
	patterns: AliasPatterns,
	validators: Validators,
	subscribers: Vec<Subscriber>,
	next_subscriber: u64,
}

impl Library {
	/// Create a library over `tree` with the given validator registry.
	pub fn new(tree: Value, validators: Validators) -> Self {
		Self {
			tree,
			patterns: AliasPatterns::new(),
			validators,
			subscribers: Vec::new(),
			next_subscriber: 0,
		}
	}

	/// The current tree root.
	pub fn tree(&self) -> &Value {
		&self.tree
	}

	/// Replace the tree wholesale.
	///
	/// Subscribers are notified with the full-reset sentinel: `None` in
	/// place of an itemized mutation list.
	pub fn load(&mut self, tree: Value) {
		debug!("loading replacement tree");
		self.tree = tree;
		self.notify(None);
	}

	/// Look up a node by dotted or slashed reference.
	///
	/// Returns the normalized path and the node's projection when it
	/// satisfies the token shape or the group-metadata shape. A missing path
	/// or an invalid shape is `None`; lookup misses are never errors.
	pub fn get(&self, reference: &str) -> Option<(String, Value)> {
		let keys = path::segments(reference);
		let node = get_path(&self.tree, &keys)?;
		let projected = match classify(node)? {
			NodeShape::Token => pick(node, &TOKEN_KEYS),
			NodeShape::Group => pick(node, &META_KEYS),
		};
		Some((path::normalize(reference), projected))
	}

	/// Resolve a raw value against the current tree.
	///
	/// See [`resolver::resolve_value`] for the alias grammars, the
	/// interpolation behavior, and what `strict` changes.
	pub fn resolve_value(&self, value: &Value, strict: bool) -> Result<Value> {
		resolver::resolve_value(&self.tree, &self.patterns, value, strict)
	}

	/// Resolve a candidate token at `reference`: inherited ancestor
	/// metadata, alias resolution, and validator normalization.
	///
	/// The candidate need not be stored in the tree, so this doubles as a
	/// preview of a prospective edit. See [`resolver::resolve_token`].
	pub fn resolve(&self, reference: &str, candidate: &Value, strict: bool) -> Result<Value> {
		resolver::resolve_token(
			&self.tree,
			&self.patterns,
			&self.validators,
			reference,
			candidate,
			strict,
		)
	}

	/// Register a subscriber invoked synchronously, in registration order,
	/// after every `load` or `mutate` completes.
	pub fn subscribe(
		&mut self,
		callback: impl FnMut(Option<&[Mutation]>, &Value) + 'static,
	) -> SubscriberId {
		let id = SubscriberId(self.next_subscriber);
		self.next_subscriber += 1;
		self.subscribers.push(Subscriber {
			id,
			callback: Box::new(callback),
		});
		id
	}

	/// Remove a subscriber. Returns false when the id is unknown.
	pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
		let before = self.subscribers.len();
		self.subscribers.retain(|subscriber| subscriber.id != id);
		self.subscribers.len() != before
	}

	fn notify(&mut self, mutations: Option<&[Mutation]>) {
		for subscriber in &mut self.subscribers {
			(subscriber.callback)(mutations, &self.tree);
		}
	}
}
