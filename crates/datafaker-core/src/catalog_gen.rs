// @generated by tools/gen_catalog.rs from catalog/descriptors.json. Do not edit by hand.

use crate::descriptor::GeneratorDescriptor;

pub(crate) const DESCRIPTORS: &[GeneratorDescriptor] = &[
    GeneratorDescriptor::new("address", "", "Base"),
    GeneratorDescriptor::new("ancient", "", "Base"),
    GeneratorDescriptor::new("animal", "", "Base"),
    GeneratorDescriptor::new("app", "", "Base"),
    GeneratorDescriptor::new("appliance", "", "Base"),
    GeneratorDescriptor::new("aqua teen hunger force", "", "Entertainment"),
    GeneratorDescriptor::new("artist", "", "Base"),
    GeneratorDescriptor::new("australia", "", "Base"),
    GeneratorDescriptor::new("avatar", "", "Entertainment"),
    GeneratorDescriptor::new("aviation", "生成与航空相关的字符串。", "Base"),
    GeneratorDescriptor::new("aws", "", "Base"),
    GeneratorDescriptor::new("azure", "为Azure服务生成数据。这基于Azure命名约定的最佳实践：", "Base"),
    GeneratorDescriptor::new("babylon5", "", "Entertainment"),
    GeneratorDescriptor::new("Back To The Future", "", "Entertainment"),
    GeneratorDescriptor::new("barcode", "", "Base"),
    GeneratorDescriptor::new("baseball", "生成棒球比赛的随机组件，例如球队、教练、位置和球员。", "sport"),
    GeneratorDescriptor::new("basketball", "生成篮球比赛的随机组件，例如球队、教练、位置和球员。", "sport"),
    GeneratorDescriptor::new(
        "battlefield1",
        "《战地1》是由DICE开发、Electronic Arts发行的第一人称射击游戏。",
        "Videogame",
    ),
    GeneratorDescriptor::new("beer", "", "Food"),
    GeneratorDescriptor::new("big bang theory", "", "Entertainment"),
    GeneratorDescriptor::new("blood type", "", "Base"),
    GeneratorDescriptor::new("boardgame", "", "Entertainment"),
    GeneratorDescriptor::new("bojack horseman", "生成《马男波杰克》中的随机内容。", "Entertainment"),
    GeneratorDescriptor::new("book", "", "Base"),
    GeneratorDescriptor::new("bool", "", "Base"),
    GeneratorDescriptor::new(
        "bossa nova",
        "巴萨诺瓦是20世纪50年代末60年代初在巴西里约热内卢发展起来的一种桑巴音乐风格。",
        "entertainment",
    ),
    GeneratorDescriptor::new("brand", "生成随机的运动服装品牌、汽车品牌或手表品牌。仅按产品类型生成品牌。", "base"),
    GeneratorDescriptor::new("Breaking Bad", "《绝命毒师》是一部美国新西部犯罪剧情电视剧。", "entertainment"),
    GeneratorDescriptor::new(
        "Brooklyn Nine Nine",
        "《神烦警探》是一部美国警察 procedural 喜剧电视剧。",
        "entertainment",
    ),
    GeneratorDescriptor::new("buffy", "", "entertainment"),
    GeneratorDescriptor::new("business", "", "base"),
    GeneratorDescriptor::new("cnpj", "巴西国家法人登记号码(CNPJ)是公司识别号码，必须在开始任何商业活动前从联邦税务局获得。", "Base"),
    GeneratorDescriptor::new(
        "cpf",
        "CPF号码(Cadastro de Pessoas Físicas，[sepeˈɛfi]；葡萄牙语意为\"自然人登记\")",
        "base",
    ),
    GeneratorDescriptor::new("camera", "", "base"),
    GeneratorDescriptor::new("cannabis", "", "base"),
    GeneratorDescriptor::new("care provider", "", "healthcare"),
    GeneratorDescriptor::new("cat", "", "base"),
    GeneratorDescriptor::new("chess", "", "sport"),
    GeneratorDescriptor::new("chiquito", "", "base"),
    GeneratorDescriptor::new("chuck norris", "", "entertainment"),
    GeneratorDescriptor::new(
        "Clash Of Clans",
        "《部落冲突》是2012年由芬兰游戏开发商Supercell开发并发行的免费移动策略视频游戏。",
        "Videogame",
    ),
    GeneratorDescriptor::new("Code", "生成ISBN、gin、ean等代码。", "Base"),
    GeneratorDescriptor::new("Coffee", "", "Food"),
    GeneratorDescriptor::new("Coin", "", "Base"),
    GeneratorDescriptor::new("Color", "", "Base"),
    GeneratorDescriptor::new("Commerce", "", "Base"),
    GeneratorDescriptor::new("Community", "《废柴联盟》是由丹·哈蒙创作的美国电视情景喜剧。", "Base"),
    GeneratorDescriptor::new("Company", "", "Base"),
    GeneratorDescriptor::new("Compass", "", "Base"),
    GeneratorDescriptor::new("Computer", "生成与计算机相关的不同属性，如操作系统、类型、平台和品牌。", "Base"),
    GeneratorDescriptor::new("Construction", "", "Base"),
    GeneratorDescriptor::new(
        "Control",
        "《控制》是由Remedy Entertainment开发、505 Games发行的动作冒险游戏。",
        "Videogame",
    ),
    GeneratorDescriptor::new("Cosmere", "Cosmere是一个虚构的共享宇宙，布兰登·桑德森的多部小说都发生在这里。", "Base"),
    GeneratorDescriptor::new("Country", "", "Base"),
    GeneratorDescriptor::new(
        "Cowboy Bebop",
        "《星际牛仔》是一部日本新黑色科幻动画电视剧，最初于1998年至1999年播出。",
        "Entertainment",
    ),
    GeneratorDescriptor::new("Cricket", "", "Sport"),
    GeneratorDescriptor::new("Crypto Coin", "", "Base"),
    GeneratorDescriptor::new(
        "Culture Series",
        "《文化系列》是苏格兰作家伊恩·M·班克斯创作的科幻系列小说，于1987年至2012年间出版。",
        "Base",
    ),
    GeneratorDescriptor::new("Currency", "", "Base"),
    GeneratorDescriptor::new(
        "Dark Souls",
        "《黑暗之魂》是由FromSoftware的宫崎英高创建、万代南梦宫娱乐发行的一系列动作角色扮演游戏。",
        "Videogame",
    ),
    GeneratorDescriptor::new("Date And Time", "随机日期生成器。", "Base"),
    GeneratorDescriptor::new("Dc Comics", "", "Base"),
    GeneratorDescriptor::new("Demographic", "", "Base"),
    GeneratorDescriptor::new("Departed", "", "Entertainment"),
    GeneratorDescriptor::new("Dessert", "", "Food"),
    GeneratorDescriptor::new("Detective Conan", "《名侦探柯南》是由青山刚昌创作并绘制的日本侦探漫画系列。", "Entertainment"),
    GeneratorDescriptor::new("Device", "", "Base"),
    GeneratorDescriptor::new("Disease", "生成随机的各种疾病。", "Healthcare"),
    GeneratorDescriptor::new("Doctor Who", "", "Entertainment"),
    GeneratorDescriptor::new("Dog", "", "Base"),
    GeneratorDescriptor::new("Domain", "域名生成器。", "Base"),
    GeneratorDescriptor::new("Doraemon", "", "Entertainment"),
    GeneratorDescriptor::new(
        "Dota2",
        "《Dota 2》是由Valve Corporation开发并发行的多人在线战斗竞技场(MOBA)游戏。",
        "Videogame",
    ),
    GeneratorDescriptor::new("Dragon Ball", "", "Entertainment"),
    GeneratorDescriptor::new("Driving License", "", "Base"),
    GeneratorDescriptor::new("Drone", "无人驾驶飞行器(UAV)，通常称为无人机，是一种没有人类飞行员、机组人员或乘客的飞机。", "Base"),
    GeneratorDescriptor::new("Dumb And Dumber", "", "Entertainment"),
    GeneratorDescriptor::new("Dune", "", "Entertainment"),
    GeneratorDescriptor::new(
        "Dungeons And Dragons",
        "《龙与地下城》是一款奇幻桌面角色扮演游戏，最初由加里·吉盖克斯和戴夫·阿内森设计。",
        "Base",
    ),
    GeneratorDescriptor::new("Educator", "", "Base"),
    GeneratorDescriptor::new(
        "Elden Ring",
        "《艾尔登法环》是2022年由FromSoftware开发、万代南梦宫娱乐发行的动作角色扮演游戏。",
        "Videogame",
    ),
    GeneratorDescriptor::new(
        "Elder Scrolls",
        "《上古卷轴》是一系列动作角色扮演视频游戏，主要由Bethesda Game Studios开发，Bethesda Softworks发行。",
        "Videogame",
    ),
    GeneratorDescriptor::new("Electrical Components", "", "Base"),
    GeneratorDescriptor::new("Emoji", "从Emoji 1.0中挑选的表情符号。", "Base"),
    GeneratorDescriptor::new("England Foot Ball", "", "Sport"),
    GeneratorDescriptor::new("Esports", "电子竞技(Esports)是一种使用视频游戏进行的竞赛形式。", "Videogame"),
    GeneratorDescriptor::new("Fake Duration", "", "Base"),
    GeneratorDescriptor::new(
        "Fallout",
        "《辐射：后核角色扮演游戏》是1997年由Interplay Productions开发并发行的角色扮演视频游戏。",
        "Videogame",
    ),
    GeneratorDescriptor::new("Family Guy", "", "Entertainment"),
    GeneratorDescriptor::new("Famous Last Words", "", "Base"),
    GeneratorDescriptor::new("File", "", "Base"),
    GeneratorDescriptor::new(
        "Final Fantasy XIV",
        "《最终幻想XIV》是一款大型多人在线角色扮演游戏，具有玩家可以相互交互和与环境交互的持久世界。",
        "Videogame",
    ),
    GeneratorDescriptor::new("Final Space", "《太空终界》是一部成人动画太空歌剧喜剧剧情电视剧。", "Entertainment"),
    GeneratorDescriptor::new("Finance", "", "Base"),
    GeneratorDescriptor::new("Financial Terms", "提供金融术语。", "Base"),
    GeneratorDescriptor::new("Food", "", "Food"),
    GeneratorDescriptor::new("Football", "", "Sport"),
    GeneratorDescriptor::new("Formula1", "", "Sport"),
    GeneratorDescriptor::new(
        "Fresh Prince Of Bel Air",
        "《新鲜王子妙事多》是由安迪和苏珊·博罗维茨为NBC创作的美国电视情景喜剧。",
        "Entertainment",
    ),
    GeneratorDescriptor::new("Friends", "", "Entertainment"),
    GeneratorDescriptor::new("Fullmetal Alchemist", "", "Entertainment"),
    GeneratorDescriptor::new("Funny Name", "", "Base"),
    GeneratorDescriptor::new("Futurama", "《飞出个未来》是由马特·格勒宁为福克斯广播公司创作的美国动画科幻情景喜剧。", "Entertainment"),
    GeneratorDescriptor::new("Game Of Thrones", "", "Entertainment"),
    GeneratorDescriptor::new("Garment Size", "此类用于随机生成服装尺寸。", "Base"),
    GeneratorDescriptor::new("Gender", "此类用于随机生成性别。", "Base"),
    GeneratorDescriptor::new("Ghostbusters", "", "Entertainment"),
    GeneratorDescriptor::new(
        "Grateful Dead",
        "感恩而死乐队是1965年在加利福尼亚州帕洛阿尔托成立的美国摇滚乐队。",
        "Entertainment",
    ),
    GeneratorDescriptor::new("Greek Philosopher", "", "Base"),
    GeneratorDescriptor::new("Hacker", "", "Base"),
    GeneratorDescriptor::new("Half Life", "《半衰期》是由Valve开发并发行的一系列第一人称射击游戏。", "Videogame"),
    GeneratorDescriptor::new("Harry Potter", "", "Entertainment"),
    GeneratorDescriptor::new("Hashing", "", "Base"),
    GeneratorDescriptor::new("Hearthstone", "《炉石传说》是由暴雪娱乐开发并发行的免费在线数字集换式卡牌游戏。", "Videogame"),
    GeneratorDescriptor::new(
        "Heroes Of The Storm",
        "《风暴英雄》是由暴雪娱乐开发并发行的跨界多人在线战斗竞技场视频游戏。",
        "Videogame",
    ),
    GeneratorDescriptor::new("Hey Arnold", "《嘿，阿诺德！》是由克雷格·巴特利特创作的美国动画喜剧电视剧。", "Entertainment"),
    GeneratorDescriptor::new("Hipster", "", "Base"),
    GeneratorDescriptor::new("Hitchhikers Guide To The Galaxy", "", "Entertainment"),
    GeneratorDescriptor::new("Hobbit", "", "Entertainment"),
    GeneratorDescriptor::new("Hobby", "", "Base"),
    GeneratorDescriptor::new("Hololive", "", "Base"),
    GeneratorDescriptor::new("Horse", "", "Base"),
    GeneratorDescriptor::new("House", "", "Base"),
    GeneratorDescriptor::new("How IMet Your Mother", "", "Entertainment"),
    GeneratorDescriptor::new(
        "How To Train Your Dragon",
        "《驯龙高手》是2010年美国电脑动画动作奇幻电影，大致基于克蕾西达·考威尔2003年的同名书籍。",
        "Entertainment",
    ),
    GeneratorDescriptor::new("Id Number", "", "Base"),
    GeneratorDescriptor::new("Image", "生成base64编码的光栅和矢量图像。", "Base"),
    GeneratorDescriptor::new("Industry Segments", "", "Base"),
    GeneratorDescriptor::new("Internet", "", "Base"),
    GeneratorDescriptor::new("Job", "", "Base"),
    GeneratorDescriptor::new("Joke", "", "Entertainment"),
    GeneratorDescriptor::new("Kaamelott", "", "Entertainment"),
    GeneratorDescriptor::new("Kpop", "K-pop，即韩国流行音乐的缩写，是源自韩国的一种音乐类型，作为韩国文化的一部分。", "Base"),
    GeneratorDescriptor::new("Language Code", "", "Base"),
    GeneratorDescriptor::new("Large Language Model", "与大型语言模型(LLMs)相关的提供商", "Base"),
    GeneratorDescriptor::new(
        "League Of Legends",
        "《英雄联盟》是2009年由Riot Games开发并发行的多人在线战斗竞技场视频游戏。",
        "Videogame",
    ),
    GeneratorDescriptor::new("Lebowski", "", "Entertainment"),
    GeneratorDescriptor::new("Locality", "生成不同形式的随机地区。", "Base"),
    GeneratorDescriptor::new("Location", "", "Base"),
    GeneratorDescriptor::new("Lord Of The Rings", "", "Entertainment"),
    GeneratorDescriptor::new("Lorem", "", "Base"),
    GeneratorDescriptor::new("Marketing", "生成营销流行语。", "Base"),
    GeneratorDescriptor::new("Martial Art", "武术的自定义Faker提供程序。", "Sport"),
    GeneratorDescriptor::new(
        "Marvel Snap",
        "《漫威Snap》是由Second Dinner开发、Nuverse发行的数字集换式卡牌游戏，适用于Microsoft Windows、Android和iOS。",
        "Videogame",
    ),
    GeneratorDescriptor::new("Mass Effect", "《质量效应》是一个军事科幻媒体特许经营系列。", "Videogame"),
    GeneratorDescriptor::new("Matz", "", "Base"),
    GeneratorDescriptor::new("Mbti", "迈尔斯-布里格斯类型指标", "Base"),
    GeneratorDescriptor::new("Measurement", "", "Base"),
    GeneratorDescriptor::new("Medical", "", "Base"),
    GeneratorDescriptor::new("Medical Procedure", "", "Healthcare"),
    GeneratorDescriptor::new("Medication", "", "Healthcare"),
    GeneratorDescriptor::new("Military", "军事军衔。", "Base"),
    GeneratorDescriptor::new("Minecraft", "《我的世界》是由Mojang Studios开发的沙盒游戏。", "Videogame"),
    GeneratorDescriptor::new("Money", "支持不同种类的货币。", "Base"),
    GeneratorDescriptor::new("Money Heist", "", "Entertainment"),
    GeneratorDescriptor::new("Mood", "", "Base"),
    GeneratorDescriptor::new("Mountain", "山脉名称和范围生成器。", "Base"),
    GeneratorDescriptor::new("Mountaineering", "登山运动，或称阿尔卑斯式登山，是一组涉及攀登高山的户外活动。", "Base"),
    GeneratorDescriptor::new("Movie", "", "Entertainment"),
    GeneratorDescriptor::new("Music", "", "Base"),
    GeneratorDescriptor::new("Myst", "《神秘岛》是由米勒兄弟Robyn和Rand设计的图形冒险/解谜视频游戏。", "Videogame"),
    GeneratorDescriptor::new("Name", "", "Base"),
    GeneratorDescriptor::new("Naruto", "《火影忍者》是由岸本齐史创作并绘制的日本漫画系列，讲述了漩涡鸣人的故事。", "Entertainment"),
    GeneratorDescriptor::new("Nation", "", "Base"),
    GeneratorDescriptor::new("Nato Phonetic Alphabet", "北约音标字母是使用最广泛的无线电电话拼写字母。", "Base"),
    GeneratorDescriptor::new("New Girl", "《杰茜驾到》是由伊丽莎白·梅里韦瑟创作的美国电视情景喜剧。", "Entertainment"),
    GeneratorDescriptor::new("Nigeria", "尼日利亚，正式名称为尼日利亚联邦共和国，是西非的一个国家。", "Base"),
    GeneratorDescriptor::new("Number", "", "Base"),
    GeneratorDescriptor::new("Observation", "", "Healthcare"),
    GeneratorDescriptor::new("Olympic Sport", "", "Base"),
    GeneratorDescriptor::new("One Piece", "", "Entertainment"),
    GeneratorDescriptor::new("Options", "", "Base"),
    GeneratorDescriptor::new("Oscar Movie", "奥斯卡金像奖，俗称奥斯卡奖，是颁发给电影业艺术和技术成就的奖项。", "Entertainment"),
    GeneratorDescriptor::new("Overwatch", "《守望先锋》是一款免费的团队合作动作游戏，设定在乐观的未来。", "Videogame"),
    GeneratorDescriptor::new("Passport", "", "Base"),
    GeneratorDescriptor::new("Phone Number", "", "Base"),
    GeneratorDescriptor::new("Photography", "提供与摄影相关的字符串。", "Base"),
    GeneratorDescriptor::new("Planet", "提供行星特定的元数据，如一天的长度、半径、质量等。", "Base"),
    GeneratorDescriptor::new("Pokemon", "", "Entertainment"),
    GeneratorDescriptor::new("Princess Bride", "", "Entertainment"),
    GeneratorDescriptor::new("Programming Language", "", "Base"),
    GeneratorDescriptor::new("Pronouns", "此类生成性别中立的代词", "Base"),
    GeneratorDescriptor::new(
        "Red Dead Redemption2",
        "《荒野大镖客：救赎2》是由Rockstar Games开发并发行的动作冒险游戏。",
        "Videogame",
    ),
    GeneratorDescriptor::new("Relationship", "", "Base"),
    GeneratorDescriptor::new("Resident Evil", "用于生成《生化危机》系列随机值的类。", "Entertainment"),
    GeneratorDescriptor::new("Restaurant", "", "Base"),
    GeneratorDescriptor::new("Rick And Morty", "", "Entertainment"),
    GeneratorDescriptor::new("Robin", "", "Base"),
    GeneratorDescriptor::new("Rock Band", "", "Base"),
    GeneratorDescriptor::new(
        "Ru Paul Drag Race",
        "《鲁保罗变装皇后秀》是由World of Wonder为Logo TV网络制作的真人秀竞赛系列。",
        "Entertainment",
    ),
    GeneratorDescriptor::new("Science", "", "Base"),
    GeneratorDescriptor::new("Seinfeld", "《宋飞正传》是由拉里·戴维和杰瑞·宋飞创作的美国情景喜剧电视剧。", "Entertainment"),
    GeneratorDescriptor::new("Severance", "《人生切割术》是一部美国科幻心理惊悚电视剧", "Entertainment"),
    GeneratorDescriptor::new("Shakespeare", "", "Base"),
    GeneratorDescriptor::new("Show", "", "Entertainment"),
    GeneratorDescriptor::new("Silicon Valley", "", "Entertainment"),
    GeneratorDescriptor::new("Simpsons", "", "Entertainment"),
    GeneratorDescriptor::new("Sip", "用于生成会话初始协议(SIP)相关数据的Faker类。", "Base"),
    GeneratorDescriptor::new("Size", "", "Base"),
    GeneratorDescriptor::new("Slack Emoji", "", "Base"),
    GeneratorDescriptor::new("Sonic The Hedgehog", "《刺猬索尼克》是由世嘉创建的日本视频游戏系列和媒体特许经营。", "Videogame"),
    GeneratorDescriptor::new("Soul Knight", "《元气骑士》是由凉屋游戏开发的游戏。", "Videogame"),
    GeneratorDescriptor::new("South Park", "《南方公园》是由崔·帕克和马特·斯通创作的美国动画电视系列剧。", "Entertainment"),
    GeneratorDescriptor::new("Space", "", "Base"),
    GeneratorDescriptor::new(
        "Spongebob",
        "《海绵宝宝》(或简称《海绵宝宝》)是由海洋科学教育家和动画师史蒂芬·海伦伯格为尼克国际儿童频道创作的美国动画喜剧电视系列剧。",
        "Entertainment",
    ),
    GeneratorDescriptor::new("Star Craft", "《星际争霸》是1998年由暴雪娱乐开发并发行的军事科幻实时战略游戏。", "Videogame"),
    GeneratorDescriptor::new("Star Trek", "", "Entertainment"),
    GeneratorDescriptor::new("Star Wars", "", "Entertainment"),
    GeneratorDescriptor::new("Stargate", "《星际之门》是一个军事科幻媒体特许经营系列。", "Entertainment"),
    GeneratorDescriptor::new("Stock", "", "Base"),
    GeneratorDescriptor::new("Stranger Things", "《怪奇物语》是由达菲兄弟创作的美国科幻电视系列剧。", "Entertainment"),
    GeneratorDescriptor::new(
        "Street Fighter",
        "《街头霸王》是一个日本媒体特许经营系列，以Capcom开发和发行的一系列格斗视频游戏和街机游戏为中心。",
        "Videogame",
    ),
    GeneratorDescriptor::new("Studio Ghibli", "", "Entertainment"),
    GeneratorDescriptor::new("Subscription", "", "Base"),
    GeneratorDescriptor::new("Suits", "《金装律师》是由亚伦·科尔什创作和编写的美国法律剧电视系列剧。", "Entertainment"),
    GeneratorDescriptor::new("Super Mario", "《超级马里奥》是由任天堂创建的平台游戏系列，以他们的吉祥物马里奥为主角。", "Videogame"),
    GeneratorDescriptor::new("Super Smash Bros", "《任天堂明星大乱斗》是由任天堂发行的跨界格斗游戏系列。", "Videogame"),
    GeneratorDescriptor::new("Superhero", "", "Base"),
    GeneratorDescriptor::new("Supernatural", "《邪恶力量》是由埃里克·克莱普克创作的美国黑暗奇幻剧情电视系列剧。", "Entertainment"),
    GeneratorDescriptor::new("Sword Art Online", "《刀剑神域》是由川原砾创作、abec插画的日本轻小说系列。", "Entertainment"),
    GeneratorDescriptor::new("Tea", "", "Food"),
    GeneratorDescriptor::new("Team", "", "Base"),
    GeneratorDescriptor::new("Text", "以灵活的方式生成随机文本。", "Base"),
    GeneratorDescriptor::new(
        "The Expanse",
        "《苍穹浩瀚》是由马克·弗格斯和霍克·奥斯特比为Syfy网络开发的美国科幻电视系列剧。",
        "Entertainment",
    ),
    GeneratorDescriptor::new("The It Crowd", "", "Entertainment"),
    GeneratorDescriptor::new(
        "The Kingkiller Chronicle",
        "《弑君者传奇》是美国作家帕特里克·罗斯福斯创作的奇幻三部曲。",
        "Entertainment",
    ),
    GeneratorDescriptor::new(
        "The Room",
        "《房间》是2003年由汤米·维索编剧、制作、执行制作和director制作的美国剧情片。",
        "Entertainment",
    ),
    GeneratorDescriptor::new("The Thick Of It", "", "Entertainment"),
    GeneratorDescriptor::new("The Venture Bros", "《冒险兄弟》是美国成人动画动作喜剧电视系列剧。", "Entertainment"),
    GeneratorDescriptor::new("Time", "", "Base"),
    GeneratorDescriptor::new("Time And Date", "随机时间和日期生成器。", "Base"),
    GeneratorDescriptor::new("Tire", "来源：", "Base"),
    GeneratorDescriptor::new(
        "Touhou",
        "《东方Project》，也简称为东方，是由日本独立同人游戏开发者上海爱丽丝幻乐团创作的弹幕射击游戏系列。",
        "Videogame",
    ),
    GeneratorDescriptor::new("Transport", "提供不同种类的交通工具。", "Base"),
    GeneratorDescriptor::new("Tron", "《电子世界争霸战》是1982年的美国科幻动作冒险电影。", "Entertainment"),
    GeneratorDescriptor::new(
        "Twin Peaks",
        "《双峰》是由马克·弗罗斯特和大卫·林奇创作的美国神秘连续剧剧情电视系列剧。",
        "Entertainment",
    ),
    GeneratorDescriptor::new("Twitter", "创建虚假的Twitter消息。", "Base"),
    GeneratorDescriptor::new("Unique", "此类包含确保在单独调用中唯一性的方法。", "Base"),
    GeneratorDescriptor::new("University", "", "Base"),
    GeneratorDescriptor::new(
        "VFor Vendetta",
        "《V字仇杀队》是2005年的反乌托邦政治动作电影，由詹姆斯·麦克特格执导，沃卓斯基姐妹编剧。",
        "Entertainment",
    ),
    GeneratorDescriptor::new("Vehicle", "", "Base"),
    GeneratorDescriptor::new("Verb", "", "Base"),
    GeneratorDescriptor::new("Video Game", "电子游戏是涉及与用户界面或输入设备交互的电子游戏。", "Videogame"),
    GeneratorDescriptor::new("Volleyball", "", "Sport"),
    GeneratorDescriptor::new("Warhammer Fantasy", "《战锤幻想》是一款具有中世纪幻想主题的桌面微缩模型战棋游戏。", "Videogame"),
    GeneratorDescriptor::new("Weather", "天气数据生成器。", "Base"),
    GeneratorDescriptor::new("Witcher", "", "Entertainment"),
    GeneratorDescriptor::new("Word", "", "Base"),
    GeneratorDescriptor::new("World Of Warcraft", "《魔兽世界》是2004年由暴雪娱乐发行的大型多人在线角色扮演游戏。", "Videogame"),
    GeneratorDescriptor::new("Yoda", "", "Base"),
    GeneratorDescriptor::new("Zelda", "《塞尔达传说》是由日本游戏设计师宫本茂和手冢卓志创建的动作冒险游戏特许经营系列。", "Videogame"),
    GeneratorDescriptor::new("Zodiac", "此类用于随机生成 zodiac 星座。", "Base"),
];
