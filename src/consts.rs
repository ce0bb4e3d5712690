//! GL enumerant and bitfield constants
//!
//! `name_of` answers with the first name registered for a value, so error
//! codes are listed first.

use crate::types::{GLenum, GLuint64};
use once_cell::sync::Lazy;
use std::collections::HashMap;

macro_rules! gl_constants {
    ($($name:ident = $value:expr;)*) => {
        $(pub const $name: GLenum = $value;)*

        static TABLE: &[(&str, GLenum)] = &[$((stringify!($name), $name),)*];
    };
}

gl_constants! {
    // Errors
    GL_NO_ERROR = 0;
    GL_INVALID_ENUM = 0x0500;
    GL_INVALID_VALUE = 0x0501;
    GL_INVALID_OPERATION = 0x0502;
    GL_STACK_OVERFLOW = 0x0503;
    GL_STACK_UNDERFLOW = 0x0504;
    GL_OUT_OF_MEMORY = 0x0505;
    GL_INVALID_FRAMEBUFFER_OPERATION = 0x0506;
    GL_CONTEXT_LOST = 0x0507;

    // Booleans and generic values
    GL_FALSE = 0;
    GL_TRUE = 1;
    GL_NONE = 0;
    GL_ZERO = 0;
    GL_ONE = 1;

    // Clear masks
    GL_DEPTH_BUFFER_BIT = 0x0000_0100;
    GL_STENCIL_BUFFER_BIT = 0x0000_0400;
    GL_COLOR_BUFFER_BIT = 0x0000_4000;

    // Primitives
    GL_POINTS = 0x0000;
    GL_LINES = 0x0001;
    GL_LINE_LOOP = 0x0002;
    GL_LINE_STRIP = 0x0003;
    GL_TRIANGLES = 0x0004;
    GL_TRIANGLE_STRIP = 0x0005;
    GL_TRIANGLE_FAN = 0x0006;
    GL_LINES_ADJACENCY = 0x000A;
    GL_LINE_STRIP_ADJACENCY = 0x000B;
    GL_TRIANGLES_ADJACENCY = 0x000C;
    GL_TRIANGLE_STRIP_ADJACENCY = 0x000D;
    GL_PATCHES = 0x000E;

    // Comparison functions
    GL_NEVER = 0x0200;
    GL_LESS = 0x0201;
    GL_EQUAL = 0x0202;
    GL_LEQUAL = 0x0203;
    GL_GREATER = 0x0204;
    GL_NOTEQUAL = 0x0205;
    GL_GEQUAL = 0x0206;
    GL_ALWAYS = 0x0207;

    // Blending
    GL_SRC_COLOR = 0x0300;
    GL_ONE_MINUS_SRC_COLOR = 0x0301;
    GL_SRC_ALPHA = 0x0302;
    GL_ONE_MINUS_SRC_ALPHA = 0x0303;
    GL_DST_ALPHA = 0x0304;
    GL_ONE_MINUS_DST_ALPHA = 0x0305;
    GL_DST_COLOR = 0x0306;
    GL_ONE_MINUS_DST_COLOR = 0x0307;
    GL_SRC_ALPHA_SATURATE = 0x0308;
    GL_CONSTANT_COLOR = 0x8001;
    GL_ONE_MINUS_CONSTANT_COLOR = 0x8002;
    GL_CONSTANT_ALPHA = 0x8003;
    GL_ONE_MINUS_CONSTANT_ALPHA = 0x8004;
    GL_BLEND_COLOR = 0x8005;
    GL_FUNC_ADD = 0x8006;
    GL_MIN = 0x8007;
    GL_MAX = 0x8008;
    GL_BLEND_EQUATION = 0x8009;
    GL_FUNC_SUBTRACT = 0x800A;
    GL_FUNC_REVERSE_SUBTRACT = 0x800B;
    GL_BLEND_DST_RGB = 0x80C8;
    GL_BLEND_SRC_RGB = 0x80C9;
    GL_BLEND_DST_ALPHA = 0x80CA;
    GL_BLEND_SRC_ALPHA = 0x80CB;

    // Faces and buffers
    GL_FRONT_LEFT = 0x0400;
    GL_FRONT_RIGHT = 0x0401;
    GL_BACK_LEFT = 0x0402;
    GL_BACK_RIGHT = 0x0403;
    GL_FRONT = 0x0404;
    GL_BACK = 0x0405;
    GL_LEFT = 0x0406;
    GL_RIGHT = 0x0407;
    GL_FRONT_AND_BACK = 0x0408;
    GL_CW = 0x0900;
    GL_CCW = 0x0901;

    // Capabilities
    GL_POINT_SMOOTH = 0x0B10;
    GL_LINE_SMOOTH = 0x0B20;
    GL_POLYGON_SMOOTH = 0x0B41;
    GL_CULL_FACE = 0x0B44;
    GL_DEPTH_TEST = 0x0B71;
    GL_STENCIL_TEST = 0x0B90;
    GL_DITHER = 0x0BD0;
    GL_BLEND = 0x0BE2;
    GL_COLOR_LOGIC_OP = 0x0BF2;
    GL_SCISSOR_TEST = 0x0C11;
    GL_POLYGON_OFFSET_POINT = 0x2A01;
    GL_POLYGON_OFFSET_LINE = 0x2A02;
    GL_POLYGON_OFFSET_FILL = 0x8037;
    GL_MULTISAMPLE = 0x809D;
    GL_SAMPLE_ALPHA_TO_COVERAGE = 0x809E;
    GL_SAMPLE_ALPHA_TO_ONE = 0x809F;
    GL_SAMPLE_COVERAGE = 0x80A0;
    GL_PROGRAM_POINT_SIZE = 0x8642;
    GL_DEPTH_CLAMP = 0x864F;
    GL_TEXTURE_CUBE_MAP_SEAMLESS = 0x884F;
    GL_RASTERIZER_DISCARD = 0x8C89;
    GL_PRIMITIVE_RESTART = 0x8F9D;
    GL_PRIMITIVE_RESTART_FIXED_INDEX = 0x8D69;
    GL_SAMPLE_SHADING = 0x8C36;
    GL_SAMPLE_MASK = 0x8E51;
    GL_FRAMEBUFFER_SRGB = 0x8DB9;
    GL_DEBUG_OUTPUT = 0x92E0;
    GL_DEBUG_OUTPUT_SYNCHRONOUS = 0x8242;

    // State queries
    GL_LINE_WIDTH = 0x0B21;
    GL_POLYGON_MODE = 0x0B40;
    GL_CULL_FACE_MODE = 0x0B45;
    GL_FRONT_FACE = 0x0B46;
    GL_DEPTH_RANGE = 0x0B70;
    GL_DEPTH_WRITEMASK = 0x0B72;
    GL_DEPTH_CLEAR_VALUE = 0x0B73;
    GL_DEPTH_FUNC = 0x0B74;
    GL_STENCIL_CLEAR_VALUE = 0x0B91;
    GL_STENCIL_FUNC = 0x0B92;
    GL_STENCIL_VALUE_MASK = 0x0B93;
    GL_STENCIL_FAIL = 0x0B94;
    GL_STENCIL_PASS_DEPTH_FAIL = 0x0B95;
    GL_STENCIL_PASS_DEPTH_PASS = 0x0B96;
    GL_STENCIL_REF = 0x0B97;
    GL_STENCIL_WRITEMASK = 0x0B98;
    GL_VIEWPORT = 0x0BA2;
    GL_ALPHA_TEST = 0x0BC0;
    GL_ALPHA_TEST_FUNC = 0x0BC1;
    GL_ALPHA_TEST_REF = 0x0BC2;
    GL_BLEND_DST = 0x0BE0;
    GL_BLEND_SRC = 0x0BE1;
    GL_LOGIC_OP_MODE = 0x0BF0;
    GL_DRAW_BUFFER = 0x0C01;
    GL_READ_BUFFER = 0x0C02;
    GL_SCISSOR_BOX = 0x0C10;
    GL_COLOR_CLEAR_VALUE = 0x0C22;
    GL_COLOR_WRITEMASK = 0x0C23;
    GL_DOUBLEBUFFER = 0x0C32;
    GL_STEREO = 0x0C33;
    GL_LINE_SMOOTH_HINT = 0x0C52;
    GL_POLYGON_SMOOTH_HINT = 0x0C53;
    GL_UNPACK_SWAP_BYTES = 0x0CF0;
    GL_UNPACK_LSB_FIRST = 0x0CF1;
    GL_UNPACK_ROW_LENGTH = 0x0CF2;
    GL_UNPACK_SKIP_ROWS = 0x0CF3;
    GL_UNPACK_SKIP_PIXELS = 0x0CF4;
    GL_UNPACK_ALIGNMENT = 0x0CF5;
    GL_PACK_SWAP_BYTES = 0x0D00;
    GL_PACK_LSB_FIRST = 0x0D01;
    GL_PACK_ROW_LENGTH = 0x0D02;
    GL_PACK_SKIP_ROWS = 0x0D03;
    GL_PACK_SKIP_PIXELS = 0x0D04;
    GL_PACK_ALIGNMENT = 0x0D05;
    GL_MAX_TEXTURE_SIZE = 0x0D33;
    GL_MAX_VIEWPORT_DIMS = 0x0D3A;
    GL_SUBPIXEL_BITS = 0x0D50;
    GL_POLYGON_OFFSET_UNITS = 0x2A00;
    GL_POLYGON_OFFSET_FACTOR = 0x8038;
    GL_TEXTURE_BINDING_1D = 0x8068;
    GL_TEXTURE_BINDING_2D = 0x8069;
    GL_TEXTURE_BINDING_3D = 0x806A;
    GL_PACK_SKIP_IMAGES = 0x806B;
    GL_PACK_IMAGE_HEIGHT = 0x806C;
    GL_UNPACK_SKIP_IMAGES = 0x806D;
    GL_UNPACK_IMAGE_HEIGHT = 0x806E;
    GL_SAMPLE_BUFFERS = 0x80A8;
    GL_SAMPLES = 0x80A9;
    GL_MAX_3D_TEXTURE_SIZE = 0x8073;
    GL_MAX_ELEMENTS_VERTICES = 0x80E8;
    GL_MAX_ELEMENTS_INDICES = 0x80E9;
    GL_ACTIVE_TEXTURE = 0x84E0;
    GL_MAX_RENDERBUFFER_SIZE = 0x84E8;
    GL_MAX_TEXTURE_LOD_BIAS = 0x84FD;
    GL_MAX_CUBE_MAP_TEXTURE_SIZE = 0x851C;
    GL_NUM_COMPRESSED_TEXTURE_FORMATS = 0x86A2;
    GL_COMPRESSED_TEXTURE_FORMATS = 0x86A3;
    GL_MAX_DRAW_BUFFERS = 0x8824;
    GL_MAX_VERTEX_ATTRIBS = 0x8869;
    GL_MAX_TEXTURE_IMAGE_UNITS = 0x8872;
    GL_MAX_COMBINED_TEXTURE_IMAGE_UNITS = 0x8B4D;
    GL_MAX_VERTEX_TEXTURE_IMAGE_UNITS = 0x8B4C;
    GL_MAX_FRAGMENT_UNIFORM_COMPONENTS = 0x8B49;
    GL_MAX_VERTEX_UNIFORM_COMPONENTS = 0x8B4A;
    GL_MAX_VARYING_COMPONENTS = 0x8B4B;
    GL_MAX_ARRAY_TEXTURE_LAYERS = 0x88FF;
    GL_MAX_COLOR_ATTACHMENTS = 0x8CDF;
    GL_MAX_SAMPLES = 0x8D57;
    GL_MAX_UNIFORM_BUFFER_BINDINGS = 0x8A2F;
    GL_MAX_UNIFORM_BLOCK_SIZE = 0x8A30;
    GL_UNIFORM_BUFFER_OFFSET_ALIGNMENT = 0x8A34;
    GL_MAX_TEXTURE_MAX_ANISOTROPY = 0x84FF;
    GL_MAX_COMPUTE_WORK_GROUP_COUNT = 0x91BE;
    GL_MAX_COMPUTE_WORK_GROUP_SIZE = 0x91BF;
    GL_MAX_COMPUTE_WORK_GROUP_INVOCATIONS = 0x90EB;
    GL_MAX_SHADER_STORAGE_BUFFER_BINDINGS = 0x90DD;
    GL_MAX_DEBUG_MESSAGE_LENGTH = 0x9143;
    GL_MAX_LABEL_LENGTH = 0x82E8;
    GL_MAJOR_VERSION = 0x821B;
    GL_MINOR_VERSION = 0x821C;
    GL_NUM_EXTENSIONS = 0x821D;
    GL_CONTEXT_FLAGS = 0x821E;
    GL_CONTEXT_PROFILE_MASK = 0x9126;
    GL_ARRAY_BUFFER_BINDING = 0x8894;
    GL_ELEMENT_ARRAY_BUFFER_BINDING = 0x8895;
    GL_VERTEX_ARRAY_BINDING = 0x85B5;
    GL_CURRENT_PROGRAM = 0x8B8D;
    GL_FRAMEBUFFER_BINDING = 0x8CA6;
    GL_DRAW_FRAMEBUFFER_BINDING = 0x8CA6;
    GL_RENDERBUFFER_BINDING = 0x8CA7;
    GL_READ_FRAMEBUFFER_BINDING = 0x8CAA;
    GL_UNIFORM_BUFFER_BINDING = 0x8A28;

    // Context flags
    GL_CONTEXT_CORE_PROFILE_BIT = 0x0000_0001;
    GL_CONTEXT_COMPATIBILITY_PROFILE_BIT = 0x0000_0002;
    GL_CONTEXT_FLAG_FORWARD_COMPATIBLE_BIT = 0x0000_0001;
    GL_CONTEXT_FLAG_DEBUG_BIT = 0x0000_0002;
    GL_CONTEXT_FLAG_ROBUST_ACCESS_BIT = 0x0000_0004;

    // Hints
    GL_DONT_CARE = 0x1100;
    GL_FASTEST = 0x1101;
    GL_NICEST = 0x1102;
    GL_FRAGMENT_SHADER_DERIVATIVE_HINT = 0x8B8B;
    GL_TEXTURE_COMPRESSION_HINT = 0x84EF;

    // Data types
    GL_BYTE = 0x1400;
    GL_UNSIGNED_BYTE = 0x1401;
    GL_SHORT = 0x1402;
    GL_UNSIGNED_SHORT = 0x1403;
    GL_INT = 0x1404;
    GL_UNSIGNED_INT = 0x1405;
    GL_FLOAT = 0x1406;
    GL_DOUBLE = 0x140A;
    GL_HALF_FLOAT = 0x140B;
    GL_FIXED = 0x140C;
    GL_UNSIGNED_BYTE_3_3_2 = 0x8032;
    GL_UNSIGNED_SHORT_4_4_4_4 = 0x8033;
    GL_UNSIGNED_SHORT_5_5_5_1 = 0x8034;
    GL_UNSIGNED_INT_8_8_8_8 = 0x8035;
    GL_UNSIGNED_INT_10_10_10_2 = 0x8036;
    GL_UNSIGNED_SHORT_5_6_5 = 0x8363;
    GL_UNSIGNED_BYTE_2_3_3_REV = 0x8362;
    GL_UNSIGNED_SHORT_5_6_5_REV = 0x8364;
    GL_UNSIGNED_SHORT_4_4_4_4_REV = 0x8365;
    GL_UNSIGNED_SHORT_1_5_5_5_REV = 0x8366;
    GL_UNSIGNED_INT_8_8_8_8_REV = 0x8367;
    GL_UNSIGNED_INT_2_10_10_10_REV = 0x8368;
    GL_UNSIGNED_INT_24_8 = 0x84FA;
    GL_UNSIGNED_INT_10F_11F_11F_REV = 0x8C3B;
    GL_UNSIGNED_INT_5_9_9_9_REV = 0x8C3E;
    GL_FLOAT_32_UNSIGNED_INT_24_8_REV = 0x8DAD;
    GL_INT_2_10_10_10_REV = 0x8D9F;

    // Logic ops
    GL_CLEAR = 0x1500;
    GL_AND = 0x1501;
    GL_AND_REVERSE = 0x1502;
    GL_COPY = 0x1503;
    GL_AND_INVERTED = 0x1504;
    GL_NOOP = 0x1505;
    GL_XOR = 0x1506;
    GL_OR = 0x1507;
    GL_NOR = 0x1508;
    GL_EQUIV = 0x1509;
    GL_INVERT = 0x150A;
    GL_OR_REVERSE = 0x150B;
    GL_COPY_INVERTED = 0x150C;
    GL_OR_INVERTED = 0x150D;
    GL_NAND = 0x150E;
    GL_SET = 0x150F;

    // Matrices and pixel formats
    GL_TEXTURE = 0x1702;
    GL_COLOR = 0x1800;
    GL_DEPTH = 0x1801;
    GL_STENCIL = 0x1802;
    GL_STENCIL_INDEX = 0x1901;
    GL_DEPTH_COMPONENT = 0x1902;
    GL_RED = 0x1903;
    GL_GREEN = 0x1904;
    GL_BLUE = 0x1905;
    GL_ALPHA = 0x1906;
    GL_RGB = 0x1907;
    GL_RGBA = 0x1908;
    GL_BGR = 0x80E0;
    GL_BGRA = 0x80E1;
    GL_RG = 0x8227;
    GL_RG_INTEGER = 0x8228;
    GL_RED_INTEGER = 0x8D94;
    GL_GREEN_INTEGER = 0x8D95;
    GL_BLUE_INTEGER = 0x8D96;
    GL_RGB_INTEGER = 0x8D98;
    GL_RGBA_INTEGER = 0x8D99;
    GL_BGR_INTEGER = 0x8D9A;
    GL_BGRA_INTEGER = 0x8D9B;
    GL_DEPTH_STENCIL = 0x84F9;

    // Polygon modes
    GL_POINT = 0x1B00;
    GL_LINE = 0x1B01;
    GL_FILL = 0x1B02;

    // Stencil ops
    GL_KEEP = 0x1E00;
    GL_REPLACE = 0x1E01;
    GL_INCR = 0x1E02;
    GL_DECR = 0x1E03;
    GL_INCR_WRAP = 0x8507;
    GL_DECR_WRAP = 0x8508;

    // Strings
    GL_VENDOR = 0x1F00;
    GL_RENDERER = 0x1F01;
    GL_VERSION = 0x1F02;
    GL_EXTENSIONS = 0x1F03;
    GL_SHADING_LANGUAGE_VERSION = 0x8B8C;

    // Texture filtering and wrapping
    GL_NEAREST = 0x2600;
    GL_LINEAR = 0x2601;
    GL_NEAREST_MIPMAP_NEAREST = 0x2700;
    GL_LINEAR_MIPMAP_NEAREST = 0x2701;
    GL_NEAREST_MIPMAP_LINEAR = 0x2702;
    GL_LINEAR_MIPMAP_LINEAR = 0x2703;
    GL_TEXTURE_MAG_FILTER = 0x2800;
    GL_TEXTURE_MIN_FILTER = 0x2801;
    GL_TEXTURE_WRAP_S = 0x2802;
    GL_TEXTURE_WRAP_T = 0x2803;
    GL_TEXTURE_WRAP_R = 0x8072;
    GL_REPEAT = 0x2901;
    GL_CLAMP_TO_BORDER = 0x812D;
    GL_CLAMP_TO_EDGE = 0x812F;
    GL_MIRRORED_REPEAT = 0x8370;
    GL_MIRROR_CLAMP_TO_EDGE = 0x8743;
    GL_TEXTURE_BORDER_COLOR = 0x1004;
    GL_TEXTURE_WIDTH = 0x1000;
    GL_TEXTURE_HEIGHT = 0x1001;
    GL_TEXTURE_INTERNAL_FORMAT = 0x1003;
    GL_TEXTURE_MIN_LOD = 0x813A;
    GL_TEXTURE_MAX_LOD = 0x813B;
    GL_TEXTURE_BASE_LEVEL = 0x813C;
    GL_TEXTURE_MAX_LEVEL = 0x813D;
    GL_TEXTURE_LOD_BIAS = 0x8501;
    GL_TEXTURE_COMPARE_MODE = 0x884C;
    GL_TEXTURE_COMPARE_FUNC = 0x884D;
    GL_COMPARE_REF_TO_TEXTURE = 0x884E;
    GL_TEXTURE_SWIZZLE_R = 0x8E42;
    GL_TEXTURE_SWIZZLE_G = 0x8E43;
    GL_TEXTURE_SWIZZLE_B = 0x8E44;
    GL_TEXTURE_SWIZZLE_A = 0x8E45;
    GL_TEXTURE_SWIZZLE_RGBA = 0x8E46;
    GL_TEXTURE_MAX_ANISOTROPY = 0x84FE;

    // Texture targets
    GL_TEXTURE_1D = 0x0DE0;
    GL_TEXTURE_2D = 0x0DE1;
    GL_PROXY_TEXTURE_1D = 0x8063;
    GL_PROXY_TEXTURE_2D = 0x8064;
    GL_TEXTURE_3D = 0x806F;
    GL_PROXY_TEXTURE_3D = 0x8070;
    GL_TEXTURE_RECTANGLE = 0x84F5;
    GL_TEXTURE_CUBE_MAP = 0x8513;
    GL_TEXTURE_BINDING_CUBE_MAP = 0x8514;
    GL_TEXTURE_CUBE_MAP_POSITIVE_X = 0x8515;
    GL_TEXTURE_CUBE_MAP_NEGATIVE_X = 0x8516;
    GL_TEXTURE_CUBE_MAP_POSITIVE_Y = 0x8517;
    GL_TEXTURE_CUBE_MAP_NEGATIVE_Y = 0x8518;
    GL_TEXTURE_CUBE_MAP_POSITIVE_Z = 0x8519;
    GL_TEXTURE_CUBE_MAP_NEGATIVE_Z = 0x851A;
    GL_TEXTURE_1D_ARRAY = 0x8C18;
    GL_TEXTURE_2D_ARRAY = 0x8C1A;
    GL_TEXTURE_BUFFER = 0x8C2A;
    GL_TEXTURE_CUBE_MAP_ARRAY = 0x9009;
    GL_TEXTURE_2D_MULTISAMPLE = 0x9100;
    GL_TEXTURE_2D_MULTISAMPLE_ARRAY = 0x9102;

    // Texture units
    GL_TEXTURE0 = 0x84C0;
    GL_TEXTURE1 = 0x84C1;
    GL_TEXTURE2 = 0x84C2;
    GL_TEXTURE3 = 0x84C3;
    GL_TEXTURE4 = 0x84C4;
    GL_TEXTURE5 = 0x84C5;
    GL_TEXTURE6 = 0x84C6;
    GL_TEXTURE7 = 0x84C7;
    GL_TEXTURE8 = 0x84C8;
    GL_TEXTURE9 = 0x84C9;
    GL_TEXTURE10 = 0x84CA;
    GL_TEXTURE11 = 0x84CB;
    GL_TEXTURE12 = 0x84CC;
    GL_TEXTURE13 = 0x84CD;
    GL_TEXTURE14 = 0x84CE;
    GL_TEXTURE15 = 0x84CF;
    GL_TEXTURE16 = 0x84D0;
    GL_TEXTURE31 = 0x84DF;

    // Internal formats
    GL_R3_G3_B2 = 0x2A10;
    GL_RGB4 = 0x804F;
    GL_RGB5 = 0x8050;
    GL_RGB8 = 0x8051;
    GL_RGB10 = 0x8052;
    GL_RGB12 = 0x8053;
    GL_RGB16 = 0x8054;
    GL_RGBA2 = 0x8055;
    GL_RGBA4 = 0x8056;
    GL_RGB5_A1 = 0x8057;
    GL_RGBA8 = 0x8058;
    GL_RGB10_A2 = 0x8059;
    GL_RGBA12 = 0x805A;
    GL_RGBA16 = 0x805B;
    GL_R8 = 0x8229;
    GL_R16 = 0x822A;
    GL_RG8 = 0x822B;
    GL_RG16 = 0x822C;
    GL_R16F = 0x822D;
    GL_R32F = 0x822E;
    GL_RG16F = 0x822F;
    GL_RG32F = 0x8230;
    GL_R8I = 0x8231;
    GL_R8UI = 0x8232;
    GL_R16I = 0x8233;
    GL_R16UI = 0x8234;
    GL_R32I = 0x8235;
    GL_R32UI = 0x8236;
    GL_RG8I = 0x8237;
    GL_RG8UI = 0x8238;
    GL_RG16I = 0x8239;
    GL_RG16UI = 0x823A;
    GL_RG32I = 0x823B;
    GL_RG32UI = 0x823C;
    GL_RGBA32F = 0x8814;
    GL_RGB32F = 0x8815;
    GL_RGBA16F = 0x881A;
    GL_RGB16F = 0x881B;
    GL_R11F_G11F_B10F = 0x8C3A;
    GL_RGB9_E5 = 0x8C3D;
    GL_SRGB = 0x8C40;
    GL_SRGB8 = 0x8C41;
    GL_SRGB_ALPHA = 0x8C42;
    GL_SRGB8_ALPHA8 = 0x8C43;
    GL_RGBA32UI = 0x8D70;
    GL_RGB32UI = 0x8D71;
    GL_RGBA16UI = 0x8D76;
    GL_RGB16UI = 0x8D77;
    GL_RGBA8UI = 0x8D7C;
    GL_RGB8UI = 0x8D7D;
    GL_RGBA32I = 0x8D82;
    GL_RGB32I = 0x8D83;
    GL_RGBA16I = 0x8D88;
    GL_RGB16I = 0x8D89;
    GL_RGBA8I = 0x8D8E;
    GL_RGB8I = 0x8D8F;
    GL_DEPTH_COMPONENT16 = 0x81A5;
    GL_DEPTH_COMPONENT24 = 0x81A6;
    GL_DEPTH_COMPONENT32 = 0x81A7;
    GL_DEPTH_COMPONENT32F = 0x8CAC;
    GL_DEPTH24_STENCIL8 = 0x88F0;
    GL_DEPTH32F_STENCIL8 = 0x8CAD;
    GL_STENCIL_INDEX8 = 0x8D48;
    GL_COMPRESSED_RGB_S3TC_DXT1_EXT = 0x83F0;
    GL_COMPRESSED_RGBA_S3TC_DXT1_EXT = 0x83F1;
    GL_COMPRESSED_RGBA_S3TC_DXT3_EXT = 0x83F2;
    GL_COMPRESSED_RGBA_S3TC_DXT5_EXT = 0x83F3;
    GL_COMPRESSED_RED_RGTC1 = 0x8DBB;
    GL_COMPRESSED_RG_RGTC2 = 0x8DBD;
    GL_COMPRESSED_RGBA_BPTC_UNORM = 0x8E8C;
    GL_COMPRESSED_RGB8_ETC2 = 0x9274;
    GL_COMPRESSED_RGBA8_ETC2_EAC = 0x9278;

    // Buffers
    GL_ARRAY_BUFFER = 0x8892;
    GL_ELEMENT_ARRAY_BUFFER = 0x8893;
    GL_PIXEL_PACK_BUFFER = 0x88EB;
    GL_PIXEL_UNPACK_BUFFER = 0x88EC;
    GL_UNIFORM_BUFFER = 0x8A11;
    GL_TRANSFORM_FEEDBACK_BUFFER = 0x8C8E;
    GL_COPY_READ_BUFFER = 0x8F36;
    GL_COPY_WRITE_BUFFER = 0x8F37;
    GL_DRAW_INDIRECT_BUFFER = 0x8F3F;
    GL_SHADER_STORAGE_BUFFER = 0x90D2;
    GL_DISPATCH_INDIRECT_BUFFER = 0x90EE;
    GL_QUERY_BUFFER = 0x9192;
    GL_ATOMIC_COUNTER_BUFFER = 0x92C0;
    GL_STREAM_DRAW = 0x88E0;
    GL_STREAM_READ = 0x88E1;
    GL_STREAM_COPY = 0x88E2;
    GL_STATIC_DRAW = 0x88E4;
    GL_STATIC_READ = 0x88E5;
    GL_STATIC_COPY = 0x88E6;
    GL_DYNAMIC_DRAW = 0x88E8;
    GL_DYNAMIC_READ = 0x88E9;
    GL_DYNAMIC_COPY = 0x88EA;
    GL_READ_ONLY = 0x88B8;
    GL_WRITE_ONLY = 0x88B9;
    GL_READ_WRITE = 0x88BA;
    GL_BUFFER_ACCESS = 0x88BB;
    GL_BUFFER_MAPPED = 0x88BC;
    GL_BUFFER_MAP_POINTER = 0x88BD;
    GL_BUFFER_SIZE = 0x8764;
    GL_BUFFER_USAGE = 0x8765;
    GL_MAP_READ_BIT = 0x0001;
    GL_MAP_WRITE_BIT = 0x0002;
    GL_MAP_INVALIDATE_RANGE_BIT = 0x0004;
    GL_MAP_INVALIDATE_BUFFER_BIT = 0x0008;
    GL_MAP_FLUSH_EXPLICIT_BIT = 0x0010;
    GL_MAP_UNSYNCHRONIZED_BIT = 0x0020;
    GL_MAP_PERSISTENT_BIT = 0x0040;
    GL_MAP_COHERENT_BIT = 0x0080;
    GL_DYNAMIC_STORAGE_BIT = 0x0100;
    GL_CLIENT_STORAGE_BIT = 0x0200;

    // Queries
    GL_QUERY_COUNTER_BITS = 0x8864;
    GL_CURRENT_QUERY = 0x8865;
    GL_QUERY_RESULT = 0x8866;
    GL_QUERY_RESULT_AVAILABLE = 0x8867;
    GL_SAMPLES_PASSED = 0x8914;
    GL_ANY_SAMPLES_PASSED = 0x8C2F;
    GL_PRIMITIVES_GENERATED = 0x8C87;
    GL_TRANSFORM_FEEDBACK_PRIMITIVES_WRITTEN = 0x8C88;
    GL_TIME_ELAPSED = 0x88BF;
    GL_TIMESTAMP = 0x8E28;

    // Shaders and programs
    GL_FRAGMENT_SHADER = 0x8B30;
    GL_VERTEX_SHADER = 0x8B31;
    GL_GEOMETRY_SHADER = 0x8DD9;
    GL_TESS_EVALUATION_SHADER = 0x8E87;
    GL_TESS_CONTROL_SHADER = 0x8E88;
    GL_COMPUTE_SHADER = 0x91B9;
    GL_SHADER_TYPE = 0x8B4F;
    GL_DELETE_STATUS = 0x8B80;
    GL_COMPILE_STATUS = 0x8B81;
    GL_LINK_STATUS = 0x8B82;
    GL_VALIDATE_STATUS = 0x8B83;
    GL_INFO_LOG_LENGTH = 0x8B84;
    GL_ATTACHED_SHADERS = 0x8B85;
    GL_ACTIVE_UNIFORMS = 0x8B86;
    GL_ACTIVE_UNIFORM_MAX_LENGTH = 0x8B87;
    GL_SHADER_SOURCE_LENGTH = 0x8B88;
    GL_ACTIVE_ATTRIBUTES = 0x8B89;
    GL_ACTIVE_ATTRIBUTE_MAX_LENGTH = 0x8B8A;
    GL_ACTIVE_UNIFORM_BLOCKS = 0x8A36;
    GL_PROGRAM_SEPARABLE = 0x8258;
    GL_PROGRAM_BINARY_RETRIEVABLE_HINT = 0x8257;
    GL_COMPUTE_WORK_GROUP_SIZE = 0x8267;
    GL_SHADER_BINARY_FORMAT_SPIR_V = 0x9551;
    GL_SPIR_V_BINARY = 0x9552;
    GL_VERTEX_SHADER_BIT = 0x0000_0001;
    GL_FRAGMENT_SHADER_BIT = 0x0000_0002;
    GL_GEOMETRY_SHADER_BIT = 0x0000_0004;
    GL_TESS_CONTROL_SHADER_BIT = 0x0000_0008;
    GL_TESS_EVALUATION_SHADER_BIT = 0x0000_0010;
    GL_COMPUTE_SHADER_BIT = 0x0000_0020;
    GL_ALL_SHADER_BITS = 0xFFFF_FFFF;
    GL_PATCH_VERTICES = 0x8E72;

    // Uniform types
    GL_FLOAT_VEC2 = 0x8B50;
    GL_FLOAT_VEC3 = 0x8B51;
    GL_FLOAT_VEC4 = 0x8B52;
    GL_INT_VEC2 = 0x8B53;
    GL_INT_VEC3 = 0x8B54;
    GL_INT_VEC4 = 0x8B55;
    GL_BOOL = 0x8B56;
    GL_BOOL_VEC2 = 0x8B57;
    GL_BOOL_VEC3 = 0x8B58;
    GL_BOOL_VEC4 = 0x8B59;
    GL_FLOAT_MAT2 = 0x8B5A;
    GL_FLOAT_MAT3 = 0x8B5B;
    GL_FLOAT_MAT4 = 0x8B5C;
    GL_SAMPLER_1D = 0x8B5D;
    GL_SAMPLER_2D = 0x8B5E;
    GL_SAMPLER_3D = 0x8B5F;
    GL_SAMPLER_CUBE = 0x8B60;
    GL_SAMPLER_1D_SHADOW = 0x8B61;
    GL_SAMPLER_2D_SHADOW = 0x8B62;
    GL_SAMPLER_2D_ARRAY = 0x8DC1;
    GL_UNSIGNED_INT_VEC2 = 0x8DC6;
    GL_UNSIGNED_INT_VEC3 = 0x8DC7;
    GL_UNSIGNED_INT_VEC4 = 0x8DC8;

    // Vertex attributes
    GL_VERTEX_ATTRIB_ARRAY_ENABLED = 0x8622;
    GL_VERTEX_ATTRIB_ARRAY_SIZE = 0x8623;
    GL_VERTEX_ATTRIB_ARRAY_STRIDE = 0x8624;
    GL_VERTEX_ATTRIB_ARRAY_TYPE = 0x8625;
    GL_CURRENT_VERTEX_ATTRIB = 0x8626;
    GL_VERTEX_ATTRIB_ARRAY_POINTER = 0x8645;
    GL_VERTEX_ATTRIB_ARRAY_NORMALIZED = 0x886A;
    GL_VERTEX_ATTRIB_ARRAY_BUFFER_BINDING = 0x889F;
    GL_VERTEX_ATTRIB_ARRAY_INTEGER = 0x88FD;
    GL_VERTEX_ATTRIB_ARRAY_DIVISOR = 0x88FE;

    // Framebuffers and renderbuffers
    GL_FRAMEBUFFER = 0x8D40;
    GL_READ_FRAMEBUFFER = 0x8CA8;
    GL_DRAW_FRAMEBUFFER = 0x8CA9;
    GL_RENDERBUFFER = 0x8D41;
    GL_RENDERBUFFER_WIDTH = 0x8D42;
    GL_RENDERBUFFER_HEIGHT = 0x8D43;
    GL_RENDERBUFFER_INTERNAL_FORMAT = 0x8D44;
    GL_RENDERBUFFER_SAMPLES = 0x8CAB;
    GL_FRAMEBUFFER_ATTACHMENT_OBJECT_TYPE = 0x8CD0;
    GL_FRAMEBUFFER_ATTACHMENT_OBJECT_NAME = 0x8CD1;
    GL_FRAMEBUFFER_ATTACHMENT_TEXTURE_LEVEL = 0x8CD2;
    GL_COLOR_ATTACHMENT0 = 0x8CE0;
    GL_COLOR_ATTACHMENT1 = 0x8CE1;
    GL_COLOR_ATTACHMENT2 = 0x8CE2;
    GL_COLOR_ATTACHMENT3 = 0x8CE3;
    GL_COLOR_ATTACHMENT4 = 0x8CE4;
    GL_COLOR_ATTACHMENT5 = 0x8CE5;
    GL_COLOR_ATTACHMENT6 = 0x8CE6;
    GL_COLOR_ATTACHMENT7 = 0x8CE7;
    GL_DEPTH_ATTACHMENT = 0x8D00;
    GL_STENCIL_ATTACHMENT = 0x8D20;
    GL_DEPTH_STENCIL_ATTACHMENT = 0x821A;
    GL_FRAMEBUFFER_COMPLETE = 0x8CD5;
    GL_FRAMEBUFFER_INCOMPLETE_ATTACHMENT = 0x8CD6;
    GL_FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT = 0x8CD7;
    GL_FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER = 0x8CDB;
    GL_FRAMEBUFFER_INCOMPLETE_READ_BUFFER = 0x8CDC;
    GL_FRAMEBUFFER_UNSUPPORTED = 0x8CDD;
    GL_FRAMEBUFFER_INCOMPLETE_MULTISAMPLE = 0x8D56;
    GL_FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS = 0x8DA8;
    GL_FRAMEBUFFER_UNDEFINED = 0x8219;
    GL_FRAMEBUFFER_DEFAULT = 0x8218;

    // Sync objects
    GL_SYNC_GPU_COMMANDS_COMPLETE = 0x9117;
    GL_ALREADY_SIGNALED = 0x911A;
    GL_TIMEOUT_EXPIRED = 0x911B;
    GL_CONDITION_SATISFIED = 0x911C;
    GL_WAIT_FAILED = 0x911D;
    GL_SYNC_FLUSH_COMMANDS_BIT = 0x0000_0001;

    // Transform feedback
    GL_TRANSFORM_FEEDBACK = 0x8E22;
    GL_INTERLEAVED_ATTRIBS = 0x8C8C;
    GL_SEPARATE_ATTRIBS = 0x8C8D;

    // Memory barriers
    GL_VERTEX_ATTRIB_ARRAY_BARRIER_BIT = 0x0000_0001;
    GL_ELEMENT_ARRAY_BARRIER_BIT = 0x0000_0002;
    GL_UNIFORM_BARRIER_BIT = 0x0000_0004;
    GL_TEXTURE_FETCH_BARRIER_BIT = 0x0000_0008;
    GL_SHADER_IMAGE_ACCESS_BARRIER_BIT = 0x0000_0020;
    GL_COMMAND_BARRIER_BIT = 0x0000_0040;
    GL_PIXEL_BUFFER_BARRIER_BIT = 0x0000_0080;
    GL_TEXTURE_UPDATE_BARRIER_BIT = 0x0000_0100;
    GL_BUFFER_UPDATE_BARRIER_BIT = 0x0000_0200;
    GL_FRAMEBUFFER_BARRIER_BIT = 0x0000_0400;
    GL_SHADER_STORAGE_BARRIER_BIT = 0x0000_2000;
    GL_ALL_BARRIER_BITS = 0xFFFF_FFFF;

    // Clip control and provoking vertex
    GL_LOWER_LEFT = 0x8CA1;
    GL_UPPER_LEFT = 0x8CA2;
    GL_NEGATIVE_ONE_TO_ONE = 0x935E;
    GL_ZERO_TO_ONE = 0x935F;
    GL_FIRST_VERTEX_CONVENTION = 0x8E4D;
    GL_LAST_VERTEX_CONVENTION = 0x8E4E;

    // Robustness
    GL_GUILTY_CONTEXT_RESET = 0x8253;
    GL_INNOCENT_CONTEXT_RESET = 0x8254;
    GL_UNKNOWN_CONTEXT_RESET = 0x8255;

    // Debug output
    GL_DEBUG_SOURCE_API = 0x8246;
    GL_DEBUG_SOURCE_WINDOW_SYSTEM = 0x8247;
    GL_DEBUG_SOURCE_SHADER_COMPILER = 0x8248;
    GL_DEBUG_SOURCE_THIRD_PARTY = 0x8249;
    GL_DEBUG_SOURCE_APPLICATION = 0x824A;
    GL_DEBUG_SOURCE_OTHER = 0x824B;
    GL_DEBUG_TYPE_ERROR = 0x824C;
    GL_DEBUG_TYPE_DEPRECATED_BEHAVIOR = 0x824D;
    GL_DEBUG_TYPE_UNDEFINED_BEHAVIOR = 0x824E;
    GL_DEBUG_TYPE_PORTABILITY = 0x824F;
    GL_DEBUG_TYPE_PERFORMANCE = 0x8250;
    GL_DEBUG_TYPE_OTHER = 0x8251;
    GL_DEBUG_TYPE_MARKER = 0x8268;
    GL_DEBUG_TYPE_PUSH_GROUP = 0x8269;
    GL_DEBUG_TYPE_POP_GROUP = 0x826A;
    GL_DEBUG_SEVERITY_NOTIFICATION = 0x826B;
    GL_DEBUG_SEVERITY_HIGH = 0x9146;
    GL_DEBUG_SEVERITY_MEDIUM = 0x9147;
    GL_DEBUG_SEVERITY_LOW = 0x9148;
    GL_BUFFER = 0x82E0;
    GL_SHADER = 0x82E1;
    GL_PROGRAM = 0x82E2;
    GL_QUERY = 0x82E3;
    GL_PROGRAM_PIPELINE = 0x82E4;
    GL_SAMPLER = 0x82E6;
    GL_VERTEX_ARRAY = 0x8074;

    // Images
    GL_IMAGE_2D = 0x904D;
    GL_INVALID_INDEX = 0xFFFF_FFFF;
}

/// `glClientWaitSync` / `glWaitSync` timeout meaning "forever"
pub const GL_TIMEOUT_IGNORED: GLuint64 = 0xFFFF_FFFF_FFFF_FFFF;

static BY_NAME: Lazy<HashMap<&'static str, GLenum>> =
    Lazy::new(|| TABLE.iter().copied().collect());

/// Value of a constant by its full name, e.g. `GL_TEXTURE_2D`
pub fn lookup(name: &str) -> Option<GLenum> {
    BY_NAME.get(name).copied()
}

/// First registered name for `value`
///
/// Many enumerants share small values (`GL_NONE`, `GL_POINTS`, bit masks),
/// so this is only meaningful for values from a known domain.
pub fn name_of(value: GLenum) -> Option<&'static str> {
    TABLE.iter().find(|(_, v)| *v == value).map(|(name, _)| *name)
}

/// Every registered `(name, value)` pair
pub fn all() -> &'static [(&'static str, GLenum)] {
    TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("GL_TEXTURE_2D"), Some(0x0DE1));
        assert_eq!(lookup("GL_COLOR_BUFFER_BIT"), Some(GL_COLOR_BUFFER_BIT));
        assert_eq!(lookup("GL_NOT_A_CONSTANT"), None);
    }

    #[test]
    fn test_error_names() {
        assert_eq!(name_of(0), Some("GL_NO_ERROR"));
        assert_eq!(name_of(GL_INVALID_ENUM), Some("GL_INVALID_ENUM"));
        assert_eq!(name_of(GL_INVALID_FRAMEBUFFER_OPERATION), Some("GL_INVALID_FRAMEBUFFER_OPERATION"));
        assert_eq!(name_of(0xDEAD_BEEF), None);
    }

    #[test]
    fn test_names_unique() {
        let mut seen = std::collections::HashSet::new();
        for (name, _) in all() {
            assert!(name.starts_with("GL_"), "{}", name);
            assert!(seen.insert(*name), "duplicate {}", name);
        }
        assert!(all().len() > 400);
    }
}
