use i18nrs::yew::use_translation;
use skillshub_shared::models::Skill;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::i18n::Locale;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct SkillCardProps {
    pub skill: Skill,
    pub locale: Locale,
}

#[function_component(SkillCard)]
pub fn skill_card(props: &SkillCardProps) -> Html {
    let (i18n, ..) = use_translation();
    let skill = &props.skill;
    let price = if skill.is_free() {
        i18n.t("home.free")
    } else {
        format!("¥{:.2}", skill.price)
    };
    let detail = Route::skill_detail(props.locale, skill.id.to_string());

    html! {
        <div class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">
                    <Link<Route> to={detail}>{ &skill.name }</Link<Route>>
                </h3>
                <p class="text-sm opacity-70 line-clamp-2">{ &skill.description }</p>
                <div class="flex items-center justify-between mt-2 text-sm">
                    <span class="badge badge-outline">
                        {
                            skill.category.as_ref().map_or_else(
                                || i18n.t("home.allCategories"),
                                |category| category.name.clone(),
                            )
                        }
                    </span>
                    <span>{ format!("⭐ {:.1}", skill.rating) }</span>
                </div>
                <div class="flex items-center justify-between mt-1">
                    <span class="font-semibold text-primary">{ price }</span>
                    <span class="text-xs opacity-60">
                        { format!("{} {}", skill.downloads_count, i18n.t("home.downloads")) }
                    </span>
                </div>
            </div>
        </div>
    }
}
