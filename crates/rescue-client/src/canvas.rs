use rescue_core::geometry::Rect;

/// Translation and horizontal scale that place a sprite into `dest`, drawn
/// around the destination's centre so a flip mirrors it in place.
pub fn sprite_transform(dest: Rect, flip_x: bool) -> (f64, f64, f64) {
    let cx = (dest.x + dest.width / 2.0) as f64;
    let cy = (dest.y + dest.height / 2.0) as f64;
    let scale_x = if flip_x { -1.0 } else { 1.0 };
    (cx, cy, scale_x)
}

/// Replays draw lists onto the 2D context of `#gameCanvas`.
#[cfg(target_family = "wasm")]
pub struct CanvasRenderer {
    ctx: web_sys::CanvasRenderingContext2d,
    sprite: web_sys::HtmlImageElement,
}

#[cfg(target_family = "wasm")]
impl CanvasRenderer {
    pub fn new(
        canvas: &web_sys::HtmlCanvasElement,
        sprite: web_sys::HtmlImageElement,
    ) -> Result<Self, String> {
        use wasm_bindgen::JsCast;

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("getContext failed: {e:?}"))?
            .ok_or("2D canvas not supported")?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .map_err(|_| "Not a CanvasRenderingContext2d")?;
        // Keep pixel-art frames crisp when scaled up
        ctx.set_image_smoothing_enabled(false);

        Ok(Self { ctx, sprite })
    }

    pub fn draw(&self, list: &rescue_core::render::DrawList) -> Result<(), wasm_bindgen::JsValue> {
        use rescue_core::render::DrawCmd;

        let ctx = &self.ctx;
        for cmd in list.commands() {
            match cmd {
                DrawCmd::FillRect { rect, color } => {
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(
                        rect.x as f64,
                        rect.y as f64,
                        rect.width as f64,
                        rect.height as f64,
                    );
                },
                DrawCmd::StrokeRect { rect, color } => {
                    ctx.set_stroke_style_str(color);
                    ctx.stroke_rect(
                        rect.x as f64,
                        rect.y as f64,
                        rect.width as f64,
                        rect.height as f64,
                    );
                },
                DrawCmd::Sprite { src, dest, flip_x } => {
                    let (cx, cy, scale_x) = sprite_transform(*dest, *flip_x);
                    let (w, h) = (dest.width as f64, dest.height as f64);
                    ctx.save();
                    let drawn = ctx
                        .translate(cx, cy)
                        .and_then(|()| ctx.scale(scale_x, 1.0))
                        .and_then(|()| {
                            ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                                &self.sprite,
                                src.x as f64,
                                src.y as f64,
                                src.width as f64,
                                src.height as f64,
                                -w / 2.0,
                                -h / 2.0,
                                w,
                                h,
                            )
                        });
                    ctx.restore();
                    drawn?;
                },
                DrawCmd::Text {
                    text,
                    x,
                    y,
                    font,
                    color,
                } => {
                    ctx.set_font(font);
                    ctx.set_fill_style_str(color);
                    ctx.fill_text(text, *x as f64, *y as f64)?;
                },
            }
        }
        Ok(())
    }
}
