use crate::builtin::builtins;
use crate::output::Output;
use crate::value::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

// state shared by a root frame and every frame nested under it
#[derive(Debug)]
struct Shared {
    out: Output,
    depth: Cell<usize>,
}

/// Marks one level of nested evaluation; the level is released on drop.
pub struct Depth(Rc<Shared>);

impl Drop for Depth {
    fn drop(&mut self) {
        self.0.depth.set(self.0.depth.get() - 1);
    }
}

/// One scope frame plus a link to the enclosing one. Frames are shared
/// through `Rc` by child frames and by the closures created in them.
pub struct Environment {
    syms: RefCell<HashMap<Rc<str>, Value>>,
    outer: Option<Rc<Environment>>,
    shared: Rc<Shared>,
}

impl Environment {
    /// The root frame, holding the builtin library and printing to stdout.
    pub fn new() -> Rc<Environment> {
        Environment::with_output(Output::Stdout)
    }

    pub fn with_output(out: Output) -> Rc<Environment> {
        Rc::new(Environment{
            syms: RefCell::new(builtins()),
            outer: None,
            shared: Rc::new(Shared{out, depth: Cell::new(0)}),
        })
    }

    pub fn nested(params: Vec<Rc<str>>, args: Vec<Value>,
                  outer: Rc<Environment>) -> Rc<Environment> {
        Rc::new(Environment{
            syms: RefCell::new(params.into_iter().zip(args).collect()),
            shared: outer.shared.clone(),
            outer: Some(outer),
        })
    }

    pub fn output(&self) -> &Output {
        &self.shared.out
    }

    /// Enter one more level of evaluation, None once `limit` levels are
    /// already active under this root.
    pub fn descend(&self, limit: usize) -> Option<Depth> {
        let depth = self.shared.depth.get();
        if depth >= limit {
            return None;
        }
        self.shared.depth.set(depth + 1);
        Some(Depth(self.shared.clone()))
    }

    /// Innermost frame binding `sym`.
    pub fn lookup(&self, sym: &str) -> Option<&Environment> {
        if self.syms.borrow().contains_key(sym) {
            Some(self)
        } else if let Some(ref otx) = self.outer {
            otx.lookup(sym)
        } else {
            None
        }
    }

    pub fn get(&self, sym: &str) -> Option<Value> {
        self.lookup(sym)
            .and_then(|cx| cx.syms.borrow().get(sym).cloned())
    }

    /// Bind in this frame, replacing any binding it already had.
    pub fn define(&self, sym: &str, value: Value) {
        self.syms.borrow_mut().insert(Rc::from(sym), value);
    }

    /// Rebind in the nearest frame that has `sym`; false if none does.
    pub fn set(&self, sym: &str, value: Value) -> bool {
        match self.lookup(sym) {
            Some(cx) => {
                cx.syms.borrow_mut().insert(Rc::from(sym), value);
                true
            },
            None => false
        }
    }

    pub fn is_bound_here(&self, sym: &str) -> bool {
        self.syms.borrow().contains_key(sym)
    }
}

///////////////////////////////////////////////////////////////////////////////
