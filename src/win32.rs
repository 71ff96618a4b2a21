//! Win32 host: window class, main window with its menu, the message loop, and
//! a GDI backed [`Surface`].

use log::{debug, error, info, trace, warn};
use widestring::{u16cstr, U16CString};
use windows::{
    core::*, Win32::Foundation::*, Win32::Graphics::Gdi::*,
    Win32::System::LibraryLoader::*, Win32::UI::WindowsAndMessaging::*,
};

use crate::config::WindowConfig;
use crate::event::{dispatch, Action, Event, IDM_ABOUT};
use crate::geometry::{Color, Point, Rect, BLACK, WHITE};
use crate::renderer::draw_flag;
use crate::surface::Surface;

/// State shared with the window procedure, reachable from the window itself
/// through its user data slot. Must outlive the window.
pub struct AppContext {
    pub instance: HINSTANCE,
    pub config: WindowConfig,
}

struct Brush {
    color: Color,
    handle: HBRUSH,
    stock: bool,
}

/// A single paint of one window. Creating it begins the paint, dropping it
/// puts back the original pen and brush, deletes the brushes it created and
/// ends the paint.
pub struct GdiSurface {
    window: HWND,
    paint: PAINTSTRUCT,
    hdc: HDC,
    client: RECT,
    original_pen: Option<HGDIOBJ>,
    original_brush: Option<HGDIOBJ>,
    brushes: Vec<Brush>,
}

impl GdiSurface {
    pub fn begin(window: HWND) -> Option<Self> {
        let mut client = RECT::default();
        if !unsafe { GetClientRect(window, &mut client) }.as_bool() {
            warn!("GetClientRect failed: {:?}", Error::from_win32());
        }

        let mut paint = PAINTSTRUCT::default();
        let hdc = unsafe { BeginPaint(window, &mut paint) };
        if hdc.0 == 0 {
            error!("BeginPaint returned no device context");
            return None;
        }

        Some(Self {
            window,
            paint,
            hdc,
            client,
            original_pen: None,
            original_brush: None,
            brushes: Vec::new(),
        })
    }

    pub fn client_rect(&self) -> Rect {
        Rect::new(self.client.left, self.client.top, self.client.right, self.client.bottom)
    }

    fn brush_for(&mut self, color: Color) -> HBRUSH {
        if let Some(brush) = self.brushes.iter().find(|b| b.color == color) {
            return brush.handle;
        }
        let stock = match color {
            BLACK => Some(BLACK_BRUSH),
            WHITE => Some(WHITE_BRUSH),
            _ => None,
        };
        let brush = match stock {
            Some(kind) => Brush {
                color,
                handle: HBRUSH(unsafe { GetStockObject(kind) }.0),
                stock: true,
            },
            None => {
                trace!("creating brush {:?}", color);
                owned_or_stock(color, unsafe { CreateSolidBrush(COLORREF(color.to_bgr())) })
            }
        };
        let handle = brush.handle;
        self.brushes.push(brush);
        handle
    }
}

/// Wraps a freshly created brush. A null handle is swapped for the white stock
/// brush, so no null handle is ever selected or deleted.
fn owned_or_stock(color: Color, handle: HBRUSH) -> Brush {
    if handle.0 == 0 {
        error!("CreateSolidBrush failed for {:?}, using the white stock brush", color);
        return Brush {
            color,
            handle: HBRUSH(unsafe { GetStockObject(WHITE_BRUSH) }.0),
            stock: true,
        };
    }
    Brush {
        color,
        handle,
        stock: false,
    }
}

fn check(ok: BOOL, what: &str) {
    if !ok.as_bool() {
        warn!("{} failed", what);
    }
}

impl Surface for GdiSurface {
    fn select_null_pen(&mut self) {
        let previous = unsafe { SelectObject(self.hdc, GetStockObject(NULL_PEN)) };
        self.original_pen.get_or_insert(previous);
    }

    fn select_brush(&mut self, color: Color) {
        let brush = self.brush_for(color);
        let previous = unsafe { SelectObject(self.hdc, HGDIOBJ(brush.0)) };
        self.original_brush.get_or_insert(previous);
    }

    fn fill_rect(&mut self, rect: Rect) {
        check(
            unsafe { Rectangle(self.hdc, rect.left, rect.top, rect.right, rect.bottom) },
            "Rectangle",
        );
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        let points: Vec<POINT> = points.iter().map(|p| POINT { x: p.x, y: p.y }).collect();
        check(unsafe { Polygon(self.hdc, &points) }, "Polygon");
    }

    fn fill_ellipse(&mut self, bounds: Rect) {
        check(
            unsafe { Ellipse(self.hdc, bounds.left, bounds.top, bounds.right, bounds.bottom) },
            "Ellipse",
        );
    }
}

impl Drop for GdiSurface {
    fn drop(&mut self) {
        unsafe {
            if let Some(pen) = self.original_pen.take() {
                SelectObject(self.hdc, pen);
            }
            if let Some(brush) = self.original_brush.take() {
                SelectObject(self.hdc, brush);
            }
            for brush in self.brushes.drain(..).filter(|b| !b.stock) {
                check(DeleteObject(HGDIOBJ(brush.handle.0)), "DeleteObject");
            }
            EndPaint(self.window, &self.paint);
        }
    }
}

fn word_pair(value: isize) -> (i32, i32) {
    let value = value as usize;
    ((value & 0xffff) as u16 as i32, ((value >> 16) & 0xffff) as u16 as i32)
}

fn translate(message: u32, wparam: WPARAM, lparam: LPARAM) -> Event {
    match message {
        WM_PAINT => Event::Paint,
        WM_SIZE => {
            let (width, height) = word_pair(lparam.0);
            Event::Resize { width, height }
        }
        WM_COMMAND => Event::Command(wparam.0 & 0xffff),
        WM_DESTROY => Event::Destroy,
        _ => Event::Other,
    }
}

#[cfg(target_pointer_width = "64")]
unsafe fn store_context(window: HWND, context: *const AppContext) {
    SetWindowLongPtrW(window, GWLP_USERDATA, context as isize);
}

#[cfg(target_pointer_width = "32")]
unsafe fn store_context(window: HWND, context: *const AppContext) {
    SetWindowLongW(window, GWLP_USERDATA, context as i32);
}

#[cfg(target_pointer_width = "64")]
unsafe fn load_context<'a>(window: HWND) -> Option<&'a AppContext> {
    (GetWindowLongPtrW(window, GWLP_USERDATA) as *const AppContext).as_ref()
}

#[cfg(target_pointer_width = "32")]
unsafe fn load_context<'a>(window: HWND) -> Option<&'a AppContext> {
    (GetWindowLongW(window, GWLP_USERDATA) as *const AppContext).as_ref()
}

fn show_about(window: HWND, context: &AppContext) {
    let text = U16CString::from_str_truncate(format!(
        "{} {}\n\nPaints a striped flag with a chevron field.",
        context.config.title,
        env!("CARGO_PKG_VERSION")
    ));
    let caption = u16cstr!("About FlagGen");
    let answer = unsafe {
        MessageBoxW(
            window,
            PCWSTR(text.as_ptr()),
            PCWSTR(caption.as_ptr()),
            MB_OKCANCEL | MB_ICONINFORMATION,
        )
    };
    debug!("about box closed with {:?}", answer);
}

extern "system" fn wndproc(window: HWND, message: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if message == WM_NCCREATE {
        let create = lparam.0 as *const CREATESTRUCTW;
        unsafe { store_context(window, (*create).lpCreateParams as *const AppContext) };
    }

    let event = translate(message, wparam, lparam);
    match dispatch(event) {
        Action::Paint => {
            match GdiSurface::begin(window) {
                Some(mut surface) => {
                    let client = surface.client_rect();
                    draw_flag(&mut surface, &client);
                    LRESULT::default()
                }
                // Let the default handler validate the update region.
                None => unsafe { DefWindowProcW(window, message, wparam, lparam) },
            }
        }
        Action::Invalidate => {
            debug!("{:?}, invalidating client area", event);
            unsafe { InvalidateRect(window, None, true) };
            LRESULT::default()
        }
        Action::ShowAbout => {
            match unsafe { load_context(window) } {
                Some(context) => show_about(window, context),
                None => warn!("about requested before the window was initialized"),
            }
            LRESULT::default()
        }
        Action::Quit => {
            unsafe { PostQuitMessage(0) };
            LRESULT::default()
        }
        Action::Default => unsafe { DefWindowProcW(window, message, wparam, lparam) },
    }
}

fn build_menu() -> Result<HMENU> {
    let bar = unsafe { CreateMenu() }?;
    let help = unsafe { CreatePopupMenu() }?;
    let about = u16cstr!("&About FlagGen...");
    let help_title = u16cstr!("&Help");
    unsafe {
        if !AppendMenuW(help, MF_STRING, IDM_ABOUT, PCWSTR(about.as_ptr())).as_bool()
            || !AppendMenuW(bar, MF_POPUP, help.0 as usize, PCWSTR(help_title.as_ptr())).as_bool()
        {
            let err = Error::from_win32();
            DestroyMenu(bar);
            DestroyMenu(help);
            return Err(err);
        }
    }
    Ok(bar)
}

pub fn setup_window(context: &AppContext) -> Result<HWND> {
    let class_name = U16CString::from_str_truncate(context.config.class_name);
    let title = U16CString::from_str_truncate(context.config.title);

    let wcex = WNDCLASSEXW {
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(wndproc),
        hInstance: context.instance,
        hIcon: unsafe { LoadIconW(None, IDI_APPLICATION) }?,
        hCursor: unsafe { LoadCursorW(None, IDC_ARROW) }?,
        hbrBackground: HBRUSH(unsafe { GetStockObject(WHITE_BRUSH) }.0),
        lpszClassName: PCWSTR(class_name.as_ptr()),
        ..Default::default()
    };
    if unsafe { RegisterClassExW(&wcex) } == 0 {
        let err = Error::from_win32();
        error!("failed to register window class {}: {}", context.config.class_name, err);
        return Err(err);
    }

    let menu = build_menu().map_err(|err| {
        error!("failed to build the menu: {}", err);
        err
    })?;

    let mut rect = RECT {
        left: 0,
        top: 0,
        right: context.config.width as i32,
        bottom: context.config.height as i32,
    };
    unsafe { AdjustWindowRect(&mut rect, WS_OVERLAPPEDWINDOW, true) };

    let hwnd = unsafe {
        CreateWindowExW(
            Default::default(),
            PCWSTR(class_name.as_ptr()),
            PCWSTR(title.as_ptr()),
            WS_OVERLAPPEDWINDOW,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            rect.right - rect.left,
            rect.bottom - rect.top,
            None,
            menu,
            context.instance,
            Some(context as *const AppContext as *const std::ffi::c_void),
        )
    };
    if hwnd.0 == 0 {
        let err = Error::from_win32();
        error!("failed to create the main window: {}", err);
        unsafe { DestroyMenu(menu) };
        return Err(err);
    }

    unsafe {
        ShowWindow(hwnd, SW_SHOW);
        UpdateWindow(hwnd);
    }

    Ok(hwnd)
}

/// Creates the main window and pumps messages until it is closed. Returns the
/// exit code carried by WM_QUIT.
pub fn run(config: WindowConfig) -> Result<usize> {
    let context = AppContext {
        instance: unsafe { GetModuleHandleW(None) }?,
        config,
    };
    let _main_window_handle = setup_window(&context)?;
    info!(
        "window {:?} open at {}x{}",
        context.config.title, context.config.width, context.config.height
    );

    let mut msg = MSG::default();
    loop {
        let status = unsafe { GetMessageW(&mut msg, None, 0, 0) };
        match status.0 {
            -1 => return Err(Error::from_win32()),
            0 => break,
            _ => unsafe {
                TranslateMessage(&msg);
                DispatchMessageW(&msg);
            },
        }
    }

    Ok(msg.wParam.0)
}
