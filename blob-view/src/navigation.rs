//! Minimal route stack standing in for a mobile navigation service.

use log::debug;

/// Screens the viewer can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    MorphingCircle,
}

/// A stack of routes. The root route is never popped.
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    /// The route currently on screen.
    pub fn current(&self) -> Route {
        // The root is never removed, so the stack is never empty.
        self.stack[self.stack.len() - 1]
    }

    pub fn push(&mut self, route: Route) {
        debug!("navigate: push {route:?}");
        self.stack.push(route);
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Pops the current route and returns it, or `None` at the root.
    pub fn go_back(&mut self) -> Option<Route> {
        if !self.can_go_back() {
            return None;
        }
        let popped = self.stack.pop();
        debug!("navigate: back from {popped:?}");
        popped
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
