//! How much memory the driver touches behind a pointer argument
//!
//! State queries are sized from a table of known `pname`s. Image transfers
//! are sized from the format, the type and the pixel-store state in effect.

use crate::consts::{self, *};
use crate::errors::{GlError, GlResult};
use crate::types::{GLenum, GLint, GLsizei};
use once_cell::sync::Lazy;
use std::collections::HashMap;

const SINGLE_VALUED: &[GLenum] = &[
    // Capabilities
    GL_BLEND,
    GL_COLOR_LOGIC_OP,
    GL_CULL_FACE,
    GL_DEBUG_OUTPUT,
    GL_DEBUG_OUTPUT_SYNCHRONOUS,
    GL_DEPTH_CLAMP,
    GL_DEPTH_TEST,
    GL_DITHER,
    GL_FRAMEBUFFER_SRGB,
    GL_LINE_SMOOTH,
    GL_MULTISAMPLE,
    GL_POINT_SMOOTH,
    GL_POLYGON_OFFSET_FILL,
    GL_POLYGON_OFFSET_LINE,
    GL_POLYGON_OFFSET_POINT,
    GL_POLYGON_SMOOTH,
    GL_PRIMITIVE_RESTART,
    GL_PRIMITIVE_RESTART_FIXED_INDEX,
    GL_PROGRAM_POINT_SIZE,
    GL_RASTERIZER_DISCARD,
    GL_SAMPLE_ALPHA_TO_COVERAGE,
    GL_SAMPLE_ALPHA_TO_ONE,
    GL_SAMPLE_COVERAGE,
    GL_SAMPLE_MASK,
    GL_SAMPLE_SHADING,
    GL_SCISSOR_TEST,
    GL_STENCIL_TEST,
    GL_TEXTURE_CUBE_MAP_SEAMLESS,
    GL_ALPHA_TEST,
    // Fixed-function state
    GL_ALPHA_TEST_FUNC,
    GL_ALPHA_TEST_REF,
    GL_BLEND_DST,
    GL_BLEND_DST_ALPHA,
    GL_BLEND_DST_RGB,
    GL_BLEND_EQUATION,
    GL_BLEND_SRC,
    GL_BLEND_SRC_ALPHA,
    GL_BLEND_SRC_RGB,
    GL_CULL_FACE_MODE,
    GL_DEPTH_CLEAR_VALUE,
    GL_DEPTH_FUNC,
    GL_DEPTH_WRITEMASK,
    GL_DOUBLEBUFFER,
    GL_DRAW_BUFFER,
    GL_FRONT_FACE,
    GL_LINE_WIDTH,
    GL_LOGIC_OP_MODE,
    GL_PATCH_VERTICES,
    GL_POLYGON_OFFSET_FACTOR,
    GL_POLYGON_OFFSET_UNITS,
    GL_READ_BUFFER,
    GL_SAMPLE_BUFFERS,
    GL_SAMPLES,
    GL_STENCIL_CLEAR_VALUE,
    GL_STENCIL_FAIL,
    GL_STENCIL_FUNC,
    GL_STENCIL_PASS_DEPTH_FAIL,
    GL_STENCIL_PASS_DEPTH_PASS,
    GL_STENCIL_REF,
    GL_STENCIL_VALUE_MASK,
    GL_STENCIL_WRITEMASK,
    GL_STEREO,
    GL_SUBPIXEL_BITS,
    GL_TIMESTAMP,
    // Pixel store
    GL_PACK_ALIGNMENT,
    GL_PACK_IMAGE_HEIGHT,
    GL_PACK_LSB_FIRST,
    GL_PACK_ROW_LENGTH,
    GL_PACK_SKIP_IMAGES,
    GL_PACK_SKIP_PIXELS,
    GL_PACK_SKIP_ROWS,
    GL_PACK_SWAP_BYTES,
    GL_UNPACK_ALIGNMENT,
    GL_UNPACK_IMAGE_HEIGHT,
    GL_UNPACK_LSB_FIRST,
    GL_UNPACK_ROW_LENGTH,
    GL_UNPACK_SKIP_IMAGES,
    GL_UNPACK_SKIP_PIXELS,
    GL_UNPACK_SKIP_ROWS,
    GL_UNPACK_SWAP_BYTES,
    // Bindings
    GL_ACTIVE_TEXTURE,
    GL_ARRAY_BUFFER_BINDING,
    GL_CURRENT_PROGRAM,
    GL_DRAW_FRAMEBUFFER_BINDING,
    GL_ELEMENT_ARRAY_BUFFER_BINDING,
    GL_READ_FRAMEBUFFER_BINDING,
    GL_RENDERBUFFER_BINDING,
    GL_TEXTURE_BINDING_1D,
    GL_TEXTURE_BINDING_2D,
    GL_TEXTURE_BINDING_3D,
    GL_TEXTURE_BINDING_CUBE_MAP,
    GL_UNIFORM_BUFFER_BINDING,
    GL_VERTEX_ARRAY_BINDING,
    // Context
    GL_CONTEXT_FLAGS,
    GL_CONTEXT_PROFILE_MASK,
    GL_MAJOR_VERSION,
    GL_MINOR_VERSION,
    GL_NUM_COMPRESSED_TEXTURE_FORMATS,
    GL_NUM_EXTENSIONS,
    // Limits
    GL_MAX_3D_TEXTURE_SIZE,
    GL_MAX_ARRAY_TEXTURE_LAYERS,
    GL_MAX_COLOR_ATTACHMENTS,
    GL_MAX_COMBINED_TEXTURE_IMAGE_UNITS,
    GL_MAX_COMPUTE_WORK_GROUP_INVOCATIONS,
    GL_MAX_CUBE_MAP_TEXTURE_SIZE,
    GL_MAX_DEBUG_MESSAGE_LENGTH,
    GL_MAX_DRAW_BUFFERS,
    GL_MAX_ELEMENTS_INDICES,
    GL_MAX_ELEMENTS_VERTICES,
    GL_MAX_FRAGMENT_UNIFORM_COMPONENTS,
    GL_MAX_LABEL_LENGTH,
    GL_MAX_RENDERBUFFER_SIZE,
    GL_MAX_SAMPLES,
    GL_MAX_SHADER_STORAGE_BUFFER_BINDINGS,
    GL_MAX_TEXTURE_IMAGE_UNITS,
    GL_MAX_TEXTURE_LOD_BIAS,
    GL_MAX_TEXTURE_MAX_ANISOTROPY,
    GL_MAX_TEXTURE_SIZE,
    GL_MAX_UNIFORM_BLOCK_SIZE,
    GL_MAX_UNIFORM_BUFFER_BINDINGS,
    GL_MAX_VARYING_COMPONENTS,
    GL_MAX_VERTEX_ATTRIBS,
    GL_MAX_VERTEX_TEXTURE_IMAGE_UNITS,
    GL_MAX_VERTEX_UNIFORM_COMPONENTS,
    GL_UNIFORM_BUFFER_OFFSET_ALIGNMENT,
];

const MULTI_VALUED: &[(GLenum, usize)] = &[
    (GL_BLEND_COLOR, 4),
    (GL_COLOR_CLEAR_VALUE, 4),
    (GL_COLOR_WRITEMASK, 4),
    (GL_DEPTH_RANGE, 2),
    (GL_MAX_VIEWPORT_DIMS, 2),
    (GL_POLYGON_MODE, 2),
    (GL_SCISSOR_BOX, 4),
    (GL_VIEWPORT, 4),
];

const INDEXED: &[(GLenum, usize)] = &[
    (GL_COLOR_WRITEMASK, 4),
    (GL_MAX_COMPUTE_WORK_GROUP_COUNT, 1),
    (GL_MAX_COMPUTE_WORK_GROUP_SIZE, 1),
    (GL_SCISSOR_BOX, 4),
    (GL_UNIFORM_BUFFER_BINDING, 1),
    (GL_VIEWPORT, 4),
];

static STATE_LEN: Lazy<HashMap<GLenum, usize>> = Lazy::new(|| {
    let mut map: HashMap<GLenum, usize> = SINGLE_VALUED.iter().map(|&pname| (pname, 1)).collect();
    map.extend(MULTI_VALUED.iter().copied());
    map
});

/// Values `glGet*v` writes for `pname`; `None` when not known
pub fn state_len(pname: GLenum) -> Option<usize> {
    STATE_LEN.get(&pname).copied()
}

/// Values `glGet*i_v` writes for one index of `target`
pub fn indexed_state_len(target: GLenum) -> Option<usize> {
    INDEXED
        .iter()
        .find(|(name, _)| *name == target)
        .map(|&(_, len)| len)
}

fn label(value: GLenum) -> String {
    match consts::name_of(value) {
        Some(name) => name.to_string(),
        None => format!("{:#06x}", value),
    }
}

/// Size of a query result, or a rejection naming the unknown `pname`
pub(crate) fn known_len(entry: &'static str, pname: GLenum, len: Option<usize>) -> GlResult<usize> {
    len.ok_or_else(|| {
        GlError::invalid(entry, format!("size of {} is not known", label(pname)))
    })
}

/// Accept only a `pname` that writes exactly one value
pub(crate) fn expect_single(entry: &'static str, pname: GLenum, len: Option<usize>) -> GlResult<()> {
    match known_len(entry, pname, len)? {
        1 => Ok(()),
        n => Err(GlError::invalid(
            entry,
            format!("{} writes {} values", label(pname), n),
        )),
    }
}

/// Values `glClearBuffer*v` reads for `buffer`
pub(crate) fn clear_buffer_len(entry: &'static str, buffer: GLenum) -> GlResult<usize> {
    match buffer {
        GL_COLOR => Ok(4),
        GL_DEPTH | GL_STENCIL => Ok(1),
        other => Err(GlError::invalid(
            entry,
            format!("{} is not a clearable buffer", label(other)),
        )),
    }
}

/// Values `glTexParameter*v` reads for `pname`
pub(crate) fn tex_parameter_len(pname: GLenum) -> usize {
    match pname {
        GL_TEXTURE_BORDER_COLOR | GL_TEXTURE_SWIZZLE_RGBA => 4,
        _ => 1,
    }
}

/// Direction of a pixel transfer; each honors its own pixel-store state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    /// Driver to client memory, e.g. `glReadPixels`
    Pack,
    /// Client memory to driver, e.g. `glTexImage2D`
    Unpack,
}

impl Transfer {
    /// Alignment, row length, skip pixels, skip rows, image height, skip images
    pub(crate) fn pnames(self) -> [GLenum; 6] {
        match self {
            Self::Pack => [
                GL_PACK_ALIGNMENT,
                GL_PACK_ROW_LENGTH,
                GL_PACK_SKIP_PIXELS,
                GL_PACK_SKIP_ROWS,
                GL_PACK_IMAGE_HEIGHT,
                GL_PACK_SKIP_IMAGES,
            ],
            Self::Unpack => [
                GL_UNPACK_ALIGNMENT,
                GL_UNPACK_ROW_LENGTH,
                GL_UNPACK_SKIP_PIXELS,
                GL_UNPACK_SKIP_ROWS,
                GL_UNPACK_IMAGE_HEIGHT,
                GL_UNPACK_SKIP_IMAGES,
            ],
        }
    }
}

/// Pixel-store state that shapes client memory during a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelStore {
    pub alignment: GLint,
    /// Pixels per row; 0 means the image width
    pub row_length: GLint,
    pub skip_pixels: GLint,
    pub skip_rows: GLint,
    /// Rows per image of a volume; 0 means the image height
    pub image_height: GLint,
    pub skip_images: GLint,
}

impl Default for PixelStore {
    fn default() -> Self {
        Self {
            alignment: 4,
            row_length: 0,
            skip_pixels: 0,
            skip_rows: 0,
            image_height: 0,
            skip_images: 0,
        }
    }
}

/// Components per pixel group
fn components(format: GLenum) -> Option<usize> {
    match format {
        GL_RED | GL_GREEN | GL_BLUE | GL_ALPHA | GL_RED_INTEGER | GL_GREEN_INTEGER
        | GL_BLUE_INTEGER | GL_DEPTH_COMPONENT | GL_STENCIL_INDEX => Some(1),
        GL_RG | GL_RG_INTEGER | GL_DEPTH_STENCIL => Some(2),
        GL_RGB | GL_BGR | GL_RGB_INTEGER | GL_BGR_INTEGER => Some(3),
        GL_RGBA | GL_BGRA | GL_RGBA_INTEGER | GL_BGRA_INTEGER => Some(4),
        _ => None,
    }
}

/// `(element, pixel)` byte sizes; packed types store a whole pixel per element
fn pixel_size(format: GLenum, type_: GLenum) -> Option<(usize, usize)> {
    let packed = match type_ {
        GL_UNSIGNED_BYTE_3_3_2 | GL_UNSIGNED_BYTE_2_3_3_REV => Some(1),
        GL_UNSIGNED_SHORT_5_6_5
        | GL_UNSIGNED_SHORT_5_6_5_REV
        | GL_UNSIGNED_SHORT_4_4_4_4
        | GL_UNSIGNED_SHORT_4_4_4_4_REV
        | GL_UNSIGNED_SHORT_5_5_5_1
        | GL_UNSIGNED_SHORT_1_5_5_5_REV => Some(2),
        GL_UNSIGNED_INT_8_8_8_8
        | GL_UNSIGNED_INT_8_8_8_8_REV
        | GL_UNSIGNED_INT_10_10_10_2
        | GL_UNSIGNED_INT_2_10_10_10_REV
        | GL_UNSIGNED_INT_24_8
        | GL_UNSIGNED_INT_10F_11F_11F_REV
        | GL_UNSIGNED_INT_5_9_9_9_REV => Some(4),
        GL_FLOAT_32_UNSIGNED_INT_24_8_REV => Some(8),
        _ => None,
    };
    if let Some(size) = packed {
        return Some((size, size));
    }
    let component = match type_ {
        GL_UNSIGNED_BYTE | GL_BYTE => 1,
        GL_UNSIGNED_SHORT | GL_SHORT | GL_HALF_FLOAT => 2,
        GL_UNSIGNED_INT | GL_INT | GL_FLOAT => 4,
        _ => return None,
    };
    Some((component, component * components(format)?))
}

impl PixelStore {
    /// Bytes from the client pointer through the last pixel of a
    /// `width` x `height` x `depth` image; 2D transfers pass a depth of 1
    pub fn image_len(
        &self,
        entry: &'static str,
        width: GLsizei,
        height: GLsizei,
        depth: GLsizei,
        format: GLenum,
        type_: GLenum,
    ) -> GlResult<usize> {
        let dim = |value: GLint, what: &str| {
            usize::try_from(value)
                .map_err(|_| GlError::invalid(entry, format!("negative {} {}", what, value)))
        };
        let (width, height, depth) = (dim(width, "width")?, dim(height, "height")?, dim(depth, "depth")?);
        if width == 0 || height == 0 || depth == 0 {
            return Ok(0);
        }

        let (element, pixel) = pixel_size(format, type_).ok_or_else(|| {
            GlError::invalid(
                entry,
                format!("unsupported pixel format {} with type {}", label(format), label(type_)),
            )
        })?;
        let alignment = match self.alignment {
            1 | 2 | 4 | 8 => self.alignment as usize,
            other => {
                return Err(GlError::invalid(entry, format!("pixel-store alignment {}", other)));
            }
        };
        let row_length = dim(self.row_length, "row length")?;
        let image_height = dim(self.image_height, "image height")?;
        let skip_pixels = dim(self.skip_pixels, "skip pixels")?;
        let skip_rows = dim(self.skip_rows, "skip rows")?;
        let skip_images = dim(self.skip_images, "skip images")?;

        let overflow = || GlError::invalid(entry, "image size overflows usize");
        let row_pixels = if row_length > 0 { row_length } else { width };
        let row_bytes = row_pixels.checked_mul(pixel).ok_or_else(overflow)?;
        let row_stride = if element >= alignment {
            row_bytes
        } else {
            row_bytes
                .div_ceil(alignment)
                .checked_mul(alignment)
                .ok_or_else(overflow)?
        };
        let rows = if image_height > 0 { image_height } else { height };
        let image_stride = row_stride.checked_mul(rows).ok_or_else(overflow)?;

        let terms = [
            (skip_images + depth - 1, image_stride),
            (skip_rows + height - 1, row_stride),
            (skip_pixels + width, pixel),
        ];
        terms.iter().try_fold(0usize, |total, &(count, stride)| {
            count
                .checked_mul(stride)
                .and_then(|bytes| total.checked_add(bytes))
                .ok_or_else(overflow)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len_2d(store: PixelStore, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum) -> usize {
        store
            .image_len("glTest", width, height, 1, format, type_)
            .unwrap()
    }

    #[test]
    fn test_state_table() {
        assert_eq!(state_len(GL_VIEWPORT), Some(4));
        assert_eq!(state_len(GL_DEPTH_RANGE), Some(2));
        assert_eq!(state_len(GL_MAX_TEXTURE_SIZE), Some(1));
        assert_eq!(state_len(GL_UNPACK_ALIGNMENT), Some(1));
        assert_eq!(state_len(0xFFFF), None);
        assert_eq!(indexed_state_len(GL_MAX_COMPUTE_WORK_GROUP_COUNT), Some(1));
        assert_eq!(indexed_state_len(GL_VIEWPORT), Some(4));
        assert_eq!(indexed_state_len(GL_MAJOR_VERSION), None);
    }

    #[test]
    fn test_single_valued_checks() {
        assert!(expect_single("glGetIntegerv", GL_MAX_TEXTURE_SIZE, state_len(GL_MAX_TEXTURE_SIZE)).is_ok());
        assert_eq!(
            expect_single("glGetIntegerv", GL_VIEWPORT, state_len(GL_VIEWPORT)),
            Err(GlError::invalid("glGetIntegerv", "GL_VIEWPORT writes 4 values"))
        );
        assert_eq!(
            expect_single("glGetIntegerv", 0xFFFF, None),
            Err(GlError::invalid("glGetIntegerv", "size of 0xffff is not known"))
        );
    }

    #[test]
    fn test_tight_rows() {
        let store = PixelStore::default();
        assert_eq!(len_2d(store, 64, 64, GL_RGBA, GL_UNSIGNED_BYTE), 16384);
        assert_eq!(len_2d(store, 4, 4, GL_RGBA, GL_FLOAT), 256);
        assert_eq!(len_2d(store, 3, 1, GL_RGB, GL_UNSIGNED_SHORT_5_6_5), 6);
        assert_eq!(len_2d(store, 2, 2, GL_DEPTH_STENCIL, GL_FLOAT_32_UNSIGNED_INT_24_8_REV), 32);
    }

    #[test]
    fn test_row_alignment() {
        let mut store = PixelStore::default();
        // 9-byte rows pad to 12; the last row is not padded
        assert_eq!(len_2d(store, 3, 2, GL_RGB, GL_UNSIGNED_BYTE), 21);
        store.alignment = 1;
        assert_eq!(len_2d(store, 3, 2, GL_RGB, GL_UNSIGNED_BYTE), 18);

        // Elements at least as wide as the alignment are never padded
        store.alignment = 4;
        assert_eq!(len_2d(store, 1, 2, GL_RGB, GL_FLOAT), 24);
        store.alignment = 8;
        assert_eq!(len_2d(store, 1, 2, GL_RGB, GL_UNSIGNED_SHORT), 14);
    }

    #[test]
    fn test_row_length_and_skips() {
        let store = PixelStore {
            row_length: 10,
            skip_pixels: 1,
            skip_rows: 2,
            ..PixelStore::default()
        };
        assert_eq!(len_2d(store, 4, 2, GL_RGBA, GL_UNSIGNED_BYTE), 140);
    }

    #[test]
    fn test_volume() {
        let store = PixelStore::default();
        assert_eq!(
            store.image_len("glTest", 2, 2, 2, GL_RGBA, GL_UNSIGNED_BYTE).unwrap(),
            32
        );

        let padded = PixelStore {
            image_height: 3,
            skip_images: 1,
            ..PixelStore::default()
        };
        assert_eq!(
            padded.image_len("glTest", 2, 2, 2, GL_RGBA, GL_UNSIGNED_BYTE).unwrap(),
            24 + 24 + 8 + 8
        );
    }

    #[test]
    fn test_empty_and_invalid_images() {
        let store = PixelStore::default();
        assert_eq!(len_2d(store, 0, 64, GL_RGBA, GL_UNSIGNED_BYTE), 0);
        assert!(store.image_len("glTest", -1, 4, 1, GL_RGBA, GL_UNSIGNED_BYTE).is_err());
        assert!(store.image_len("glTest", 4, 4, 1, 0xFFFF, GL_UNSIGNED_BYTE).is_err());
        assert!(store.image_len("glTest", 4, 4, 1, GL_RGBA, 0xFFFF).is_err());

        let odd = PixelStore {
            alignment: 3,
            ..PixelStore::default()
        };
        assert!(odd.image_len("glTest", 4, 4, 1, GL_RGBA, GL_UNSIGNED_BYTE).is_err());
    }

    #[test]
    fn test_buffer_value_counts() {
        assert_eq!(clear_buffer_len("glClearBufferfv", GL_COLOR), Ok(4));
        assert_eq!(clear_buffer_len("glClearBufferfv", GL_DEPTH), Ok(1));
        assert!(clear_buffer_len("glClearBufferfv", GL_RGBA).is_err());
        assert_eq!(tex_parameter_len(GL_TEXTURE_BORDER_COLOR), 4);
        assert_eq!(tex_parameter_len(GL_TEXTURE_MIN_FILTER), 1);
    }
}
