/// Client-side routes of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Landing page with the sign-in button
    #[default]
    Root,
    Dashboard,
    InvoiceGenerator,
    PdfTools,
}

impl Route {
    pub const NAVIGATION: [Route; 3] = [Route::Dashboard, Route::InvoiceGenerator, Route::PdfTools];

    pub fn path(self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Dashboard => "/dashboard",
            Route::InvoiceGenerator => "/dashboard/invoice-generator",
            Route::PdfTools => "/dashboard/pdf-tools",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        match path {
            "" => Some(Route::Root),
            "/dashboard" => Some(Route::Dashboard),
            "/dashboard/invoice-generator" => Some(Route::InvoiceGenerator),
            "/dashboard/pdf-tools" => Some(Route::PdfTools),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Root => "InvoiceHub",
            Route::Dashboard => "Dashboard",
            Route::InvoiceGenerator => "Invoice Generator",
            Route::PdfTools => "PDF Tools",
        }
    }

    /// Everything under `/dashboard` sits behind the session gate.
    pub fn requires_session(self) -> bool {
        self != Route::Root
    }

    /// Follow redirects for a visitor with the given session state.
    pub fn resolve(self, authenticated: bool) -> Route {
        if self.requires_session() && !authenticated {
            return Route::Root;
        }
        match self {
            Route::Dashboard => Route::InvoiceGenerator,
            other => other,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
