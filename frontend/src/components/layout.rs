use leptos::*;

struct NavItem {
    href: &'static str,
    label: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        href: "/dashboard",
        label: "Dashboard",
    },
    NavItem {
        href: "/employees",
        label: "Employees",
    },
    NavItem {
        href: "/attendance",
        label: "Attendance",
    },
];

/// Sidebar navigation frame shared by all pages.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex">
            <aside class="w-64 bg-gray-900 text-white flex flex-col flex-shrink-0">
                <div class="flex items-center gap-3 px-6 py-5 border-b border-gray-800">
                    <div class="w-8 h-8 bg-blue-500 rounded-lg flex items-center justify-center font-bold">
                        "H"
                    </div>
                    <div>
                        <div class="font-bold text-sm">"HRMS Lite"</div>
                        <div class="text-xs text-gray-400">"Admin Panel"</div>
                    </div>
                </div>
                <nav class="flex-1 px-3 py-4 space-y-1">
                    {NAV_ITEMS.iter().map(|item| view! {
                        <a
                            href=item.href
                            class="flex items-center gap-3 px-3 py-2.5 rounded-lg text-sm font-medium text-gray-400 hover:text-white hover:bg-gray-800 transition-colors"
                        >
                            {item.label}
                        </a>
                    }).collect_view()}
                </nav>
                <div class="px-6 py-4 border-t border-gray-800">
                    <p class="text-xs text-gray-500">"HRMS Lite v0.1.0"</p>
                </div>
            </aside>
            <main class="flex-1 min-w-0 overflow-auto">{children()}</main>
        </div>
    }
}
