use crate::controllers::render_worker::events::RenderEvent;

pub trait FrameSink: Send + Sync {
    fn present(&self, event: RenderEvent);
}
