//! Hover/drag state machine
//!
//! [`step`] is the only place interaction state changes. It is driven by the
//! primary button state sampled once per frame and asks an [`Interaction`]
//! context for hit tests and drag solutions, returning the next state plus the
//! side effects the controller must apply.

use glam::Vec2;
use te_core::{HandleId, Pose};

use crate::session::DragSession;

/// Primary button state for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Not pressed
    #[default]
    Up,
    /// Went down since the previous frame
    Pressed,
    /// Still down
    Held,
    /// Went up since the previous frame
    Released,
}

impl ButtonState {
    /// Derive the edge state from the previous and current "is down" samples
    pub fn from_samples(was_down: bool, is_down: bool) -> Self {
        match (was_down, is_down) {
            (false, true) => ButtonState::Pressed,
            (true, true) => ButtonState::Held,
            (true, false) => ButtonState::Released,
            (false, false) => ButtonState::Up,
        }
    }

    pub fn is_down(&self) -> bool {
        matches!(self, ButtonState::Pressed | ButtonState::Held)
    }
}

/// Pointer position and button for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    /// Pixels from the top-left of the viewport
    pub position: Vec2,
    pub button: ButtonState,
}

impl PointerSample {
    pub fn new(position: Vec2, button: ButtonState) -> Self {
        Self { position, button }
    }
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovering(HandleId),
    Dragging(DragSession),
}

impl InteractionState {
    /// The hovered or dragged handle
    pub fn active_handle(&self) -> Option<HandleId> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Hovering(id) => Some(*id),
            InteractionState::Dragging(session) => Some(session.handle),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, InteractionState::Dragging(_))
    }
}

/// Side effect requested by a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    Highlight(HandleId),
    Unhighlight(HandleId),
    DragStarted(HandleId),
    DragEnded(HandleId),
    /// Write a new pose to the target
    SetPose(Pose),
}

/// Queries the state machine needs from the current frame
pub trait Interaction {
    /// First visible handle under the pointer, in hover precedence order
    fn hover_scan(&mut self) -> Option<HandleId>;

    /// Capture a drag-start snapshot, or `None` if the drag cannot begin
    fn begin_drag(&mut self, handle: HandleId) -> Option<DragSession>;

    /// New target pose for this frame, or `None` to leave it unchanged
    fn drag(&mut self, session: &mut DragSession) -> Option<Pose>;
}

/// Advance the state machine by one frame
pub fn step(
    state: InteractionState,
    button: ButtonState,
    ctx: &mut impl Interaction,
) -> (InteractionState, Vec<Effect>) {
    let mut effects = Vec::new();

    let next = match state {
        InteractionState::Idle => match ctx.hover_scan() {
            Some(hit) => {
                effects.push(Effect::Highlight(hit));
                InteractionState::Hovering(hit)
            }
            None => InteractionState::Idle,
        },

        InteractionState::Hovering(current) => {
            let hit = ctx.hover_scan();
            let hovered = retarget_hover(current, hit, &mut effects);

            match hovered {
                Some(id) if button == ButtonState::Pressed => match ctx.begin_drag(id) {
                    Some(session) => {
                        effects.push(Effect::DragStarted(id));
                        InteractionState::Dragging(session)
                    }
                    None => InteractionState::Hovering(id),
                },
                Some(id) => InteractionState::Hovering(id),
                None => InteractionState::Idle,
            }
        }

        InteractionState::Dragging(mut session) => {
            if button.is_down() {
                if let Some(pose) = ctx.drag(&mut session) {
                    effects.push(Effect::SetPose(pose));
                }
                InteractionState::Dragging(session)
            } else {
                effects.push(Effect::Unhighlight(session.handle));
                effects.push(Effect::DragEnded(session.handle));
                InteractionState::Idle
            }
        }
    };

    (next, effects)
}

/// Move the highlight from `current` to `hit`, emitting the colour changes
fn retarget_hover(
    current: HandleId,
    hit: Option<HandleId>,
    effects: &mut Vec<Effect>,
) -> Option<HandleId> {
    match hit {
        Some(id) if id == current => {}
        Some(id) => {
            effects.push(Effect::Unhighlight(current));
            effects.push(Effect::Highlight(id));
        }
        None => effects.push(Effect::Unhighlight(current)),
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DragAnchor;
    use glam::Vec3;
    use te_core::Ray;

    /// Scripted context: fixed hover result, optional drag start, fixed pose
    struct MockContext {
        hover: Option<HandleId>,
        can_begin: bool,
        pose: Option<Pose>,
        drag_calls: usize,
    }

    impl MockContext {
        fn hovering(hover: Option<HandleId>) -> Self {
            Self {
                hover,
                can_begin: true,
                pose: None,
                drag_calls: 0,
            }
        }
    }

    fn session(handle: HandleId) -> DragSession {
        DragSession {
            handle,
            start_ray: Ray::new(Vec3::Z, Vec3::NEG_Z),
            start_pose: Pose::IDENTITY,
            anchor: DragAnchor::Axis {
                direction: Vec3::X,
                start_point: Vec3::ZERO,
            },
        }
    }

    impl Interaction for MockContext {
        fn hover_scan(&mut self) -> Option<HandleId> {
            self.hover
        }

        fn begin_drag(&mut self, handle: HandleId) -> Option<DragSession> {
            self.can_begin.then(|| session(handle))
        }

        fn drag(&mut self, _session: &mut DragSession) -> Option<Pose> {
            self.drag_calls += 1;
            self.pose
        }
    }

    #[test]
    fn test_button_edges() {
        assert_eq!(ButtonState::from_samples(false, true), ButtonState::Pressed);
        assert_eq!(ButtonState::from_samples(true, true), ButtonState::Held);
        assert_eq!(ButtonState::from_samples(true, false), ButtonState::Released);
        assert_eq!(ButtonState::from_samples(false, false), ButtonState::Up);
    }

    #[test]
    fn test_idle_to_hovering() {
        let mut ctx = MockContext::hovering(Some(HandleId::AxisX));
        let (state, effects) = step(InteractionState::Idle, ButtonState::Up, &mut ctx);
        assert_eq!(state, InteractionState::Hovering(HandleId::AxisX));
        assert_eq!(effects, vec![Effect::Highlight(HandleId::AxisX)]);
    }

    #[test]
    fn test_idle_press_does_not_start_drag() {
        let mut ctx = MockContext::hovering(Some(HandleId::AxisX));
        let (state, _) = step(InteractionState::Idle, ButtonState::Pressed, &mut ctx);
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_hover_moves_between_handles() {
        let mut ctx = MockContext::hovering(Some(HandleId::RotateY));
        let (state, effects) = step(
            InteractionState::Hovering(HandleId::AxisX),
            ButtonState::Up,
            &mut ctx,
        );
        assert_eq!(state, InteractionState::Hovering(HandleId::RotateY));
        assert_eq!(
            effects,
            vec![
                Effect::Unhighlight(HandleId::AxisX),
                Effect::Highlight(HandleId::RotateY)
            ]
        );
    }

    #[test]
    fn test_hover_lost_returns_to_idle() {
        let mut ctx = MockContext::hovering(None);
        let (state, effects) = step(
            InteractionState::Hovering(HandleId::PlaneXY),
            ButtonState::Held,
            &mut ctx,
        );
        assert_eq!(state, InteractionState::Idle);
        assert_eq!(effects, vec![Effect::Unhighlight(HandleId::PlaneXY)]);
    }

    #[test]
    fn test_press_starts_drag() {
        let mut ctx = MockContext::hovering(Some(HandleId::AxisZ));
        let (state, effects) = step(
            InteractionState::Hovering(HandleId::AxisZ),
            ButtonState::Pressed,
            &mut ctx,
        );
        assert_eq!(state.active_handle(), Some(HandleId::AxisZ));
        assert!(state.is_dragging());
        assert_eq!(effects, vec![Effect::DragStarted(HandleId::AxisZ)]);
    }

    #[test]
    fn test_failed_drag_start_keeps_hover() {
        let mut ctx = MockContext::hovering(Some(HandleId::PlaneXZ));
        ctx.can_begin = false;
        let (state, effects) = step(
            InteractionState::Hovering(HandleId::PlaneXZ),
            ButtonState::Pressed,
            &mut ctx,
        );
        assert_eq!(state, InteractionState::Hovering(HandleId::PlaneXZ));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_drag_emits_pose_while_held() {
        let mut ctx = MockContext::hovering(None);
        let pose = Pose::from_position(Vec3::new(0.5, 0.0, 0.0));
        ctx.pose = Some(pose);

        let (state, effects) = step(
            InteractionState::Dragging(session(HandleId::AxisX)),
            ButtonState::Held,
            &mut ctx,
        );
        assert!(state.is_dragging());
        assert_eq!(effects, vec![Effect::SetPose(pose)]);
        // Hover is not consulted while dragging
        assert_eq!(ctx.drag_calls, 1);
    }

    #[test]
    fn test_skipped_drag_frame_emits_nothing() {
        let mut ctx = MockContext::hovering(None);
        let (state, effects) = step(
            InteractionState::Dragging(session(HandleId::RotateX)),
            ButtonState::Held,
            &mut ctx,
        );
        assert!(state.is_dragging());
        assert!(effects.is_empty());
    }

    #[test]
    fn test_release_ends_drag() {
        let mut ctx = MockContext::hovering(Some(HandleId::AxisX));
        let (state, effects) = step(
            InteractionState::Dragging(session(HandleId::AxisX)),
            ButtonState::Released,
            &mut ctx,
        );
        assert_eq!(state, InteractionState::Idle);
        assert_eq!(
            effects,
            vec![
                Effect::Unhighlight(HandleId::AxisX),
                Effect::DragEnded(HandleId::AxisX)
            ]
        );
        assert_eq!(ctx.drag_calls, 0);
    }

    #[test]
    fn test_missed_release_edge_still_ends_drag() {
        let mut ctx = MockContext::hovering(None);
        let (state, _) = step(
            InteractionState::Dragging(session(HandleId::AxisY)),
            ButtonState::Up,
            &mut ctx,
        );
        assert_eq!(state, InteractionState::Idle);
    }
}
