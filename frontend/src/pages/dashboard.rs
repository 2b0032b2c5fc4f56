//! Dashboard view - header menu, tabbed panels, disclosure and dialog

use std::rc::Rc;

use iqb_shared::{class_names, DashboardAction, DashboardConfig, DashboardState, TabContent, TabSet};
use yew::prelude::*;

use crate::components::{
    Bars3Icon, ChevronDownIcon, Dialog, Disclosure, Menu, Switch, TabEntry, TabGroup, XMarkIcon,
};

const DIALOG_TITLE_ID: &str = "dashboard-dialog-title";

/// Reducer wrapper so the view can drive `DashboardState` through `use_reducer`
#[derive(Debug, Clone, PartialEq)]
struct DashboardModel(DashboardState);

impl Reducible for DashboardModel {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0;
        if state.apply(action) {
            log::debug!("Dashboard {:?} -> {:?}", action, state);
            Rc::new(Self(state))
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardViewProps {
    #[prop_or_default]
    pub config: DashboardConfig,
}

#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    let model = use_reducer(|| DashboardModel(DashboardState::from_config(&props.config)));
    let tabs = use_memo((), |_| TabSet::dashboard());
    let state = model.0;

    let open_modal = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(DashboardAction::OpenModal))
    };

    let close_modal = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DashboardAction::CloseModal))
    };

    let set_notification_enabled = {
        let dispatcher = model.dispatcher();
        Callback::from(move |value: bool| {
            dispatcher.dispatch(DashboardAction::SetNotificationEnabled(value))
        })
    };

    let default_tab = tabs.index_of(props.config.default_tab).unwrap_or(0);
    let entries: Vec<TabEntry> = tabs
        .entries()
        .map(|(name, content)| TabEntry {
            label: name.label().into(),
            panel: render_tab_content(
                content,
                state.notifications_enabled,
                set_notification_enabled.clone(),
            ),
        })
        .collect();

    let menu_items = vec![
        {
            let open_modal = open_modal.clone();
            Callback::from(move |active: bool| {
                html! {
                    <button
                        type="button"
                        role="menuitem"
                        class={class_names(&[
                            "w-full rounded px-3 py-2 text-left text-sm",
                            if active { "bg-gray-100" } else { "" },
                        ])}
                        onclick={open_modal.clone()}
                    >
                        { "Open Modal" }
                    </button>
                }
            })
        },
        {
            let docs_url = props.config.docs_url.clone();
            Callback::from(move |active: bool| {
                html! {
                    <a
                        href={docs_url.clone()}
                        target="_blank"
                        rel="noreferrer"
                        role="menuitem"
                        class={class_names(&[
                            "block rounded px-3 py-2 text-sm",
                            if active { "bg-gray-100" } else { "" },
                        ])}
                    >
                        { "Headless UI Docs" }
                    </a>
                }
            })
        },
    ];

    let tab_class = Callback::from(|selected: bool| {
        Classes::from(class_names(&[
            "rounded-md px-3 py-2 text-sm outline-none",
            if selected {
                "bg-blue-600 text-white"
            } else {
                "text-gray-700 hover:bg-gray-100"
            },
        ]))
    });

    let disclosure_button = Callback::from(|open: bool| {
        html! {
            <>
                <span>{ "What is Headless UI?" }</span>
                <ChevronDownIcon
                    class={Classes::from(class_names(&[
                        "h-5 w-5 transition",
                        if open { "rotate-180" } else { "rotate-0" },
                    ]))}
                />
            </>
        }
    });

    let close_click = close_modal.reform(|_: MouseEvent| ());

    html! {
        <div class="min-h-screen bg-gray-50 text-gray-900">
            <header class="border-b bg-white">
                <div class="mx-auto flex max-w-5xl items-center justify-between px-4 py-4">
                    <div class="flex items-center gap-2">
                        <Bars3Icon class={Classes::from("h-6 w-6 text-blue-600")} />
                        <h1 class="text-lg font-semibold">{ props.config.app_title.clone() }</h1>
                    </div>
                    <Menu
                        class={Classes::from("relative")}
                        button_class={Classes::from("inline-flex items-center gap-1 rounded-md border px-3 py-2 text-sm hover:bg-gray-50")}
                        items_class={Classes::from("absolute right-0 mt-2 w-44 origin-top-right rounded-md border bg-white p-1 shadow-lg focus:outline-none")}
                        button={html! {
                            <>
                                { "Menu" }
                                <ChevronDownIcon class={Classes::from("h-4 w-4")} />
                            </>
                        }}
                        items={menu_items}
                    />
                </div>
            </header>

            <main class="mx-auto max-w-5xl px-4 py-8">
                <div class="mb-6 flex items-center justify-between">
                    <h2 class="text-2xl font-semibold">{ "Dashboard" }</h2>
                    <button
                        type="button"
                        onclick={open_modal}
                        class="inline-flex items-center rounded-md bg-blue-600 px-3 py-2 text-sm font-medium text-white hover:bg-blue-700"
                    >
                        { "Open Modal" }
                    </button>
                </div>

                <TabGroup
                    entries={entries}
                    default_index={default_tab}
                    list_class={Classes::from("flex gap-2 rounded-lg border bg-white p-1")}
                    tab_class={tab_class}
                    panels_class={Classes::from("mt-4")}
                    panel_class={Classes::from("rounded-lg border bg-white p-4 shadow-sm")}
                />

                <div class="mt-8">
                    <Disclosure
                        button={disclosure_button}
                        button_class={Classes::from("flex w-full items-center justify-between rounded-md border bg-white px-4 py-3 text-left text-sm font-medium hover:bg-gray-50")}
                        panel_class={Classes::from("border-x border-b bg-white px-4 py-3 text-sm text-gray-600")}
                    >
                        { "Headless UI provides unstyled, fully accessible UI components designed to integrate with Tailwind CSS." }
                    </Disclosure>
                </div>
            </main>

            <Dialog
                open={state.modal_open}
                on_close={close_modal.clone()}
                class={Classes::from("relative z-50")}
                backdrop_class={Classes::from("fixed inset-0 bg-black/30")}
                container_class={Classes::from("fixed inset-0 flex items-center justify-center p-4")}
                panel_class={Classes::from("w-full max-w-md rounded-lg bg-white p-6 shadow-lg")}
                labelled_by={DIALOG_TITLE_ID}
            >
                <div class="flex items-center justify-between">
                    <h3 id={DIALOG_TITLE_ID} class="text-lg font-semibold">{ "Hello from Headless UI" }</h3>
                    <button
                        type="button"
                        onclick={close_click.clone()}
                        class="rounded p-1 hover:bg-gray-100"
                        aria-label="Close"
                    >
                        <XMarkIcon class={Classes::from("h-5 w-5")} />
                    </button>
                </div>
                <p class="mt-3 text-gray-600">
                    { "This dialog demonstrates Headless UI transitions and accessibility, styled with Tailwind." }
                </p>
                <div class="mt-6 flex justify-end">
                    <button
                        type="button"
                        onclick={close_click}
                        class="rounded-md bg-blue-600 px-3 py-2 text-sm font-medium text-white hover:bg-blue-700"
                    >
                        { "Close" }
                    </button>
                </div>
            </Dialog>
        </div>
    }
}

fn render_tab_content(
    content: &TabContent,
    notifications_enabled: bool,
    on_notifications_change: Callback<bool>,
) -> Html {
    match content {
        TabContent::Paragraphs(paragraphs) => html! {
            <div class="space-y-2">
                { paragraphs.iter().map(|p| html! {
                    <p class="text-gray-600">{ *p }</p>
                }).collect::<Html>() }
            </div>
        },
        TabContent::BulletList(items) => html! {
            <ul class="list-disc pl-5 text-gray-700">
                { items.iter().map(|item| html! { <li>{ *item }</li> }).collect::<Html>() }
            </ul>
        },
        TabContent::NotificationToggle { label, note } => html! {
            <div class="space-y-3">
                <div class="flex items-center justify-between">
                    <span class="text-gray-700">{ *label }</span>
                    <Switch
                        checked={notifications_enabled}
                        on_change={on_notifications_change}
                        label={*label}
                        class={Classes::from(class_names(&[
                            if notifications_enabled { "bg-blue-600" } else { "bg-gray-300" },
                            "relative inline-flex h-6 w-11 items-center rounded-full transition-colors",
                        ]))}
                    >
                        <span
                            class={class_names(&[
                                if notifications_enabled { "translate-x-6" } else { "translate-x-1" },
                                "inline-block h-4 w-4 transform rounded-full bg-white transition",
                            ])}
                        />
                    </Switch>
                </div>
                <p class="text-sm text-gray-500">{ *note }</p>
            </div>
        },
    }
}
